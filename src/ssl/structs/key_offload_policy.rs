use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KeyOffloadPolicy {
    /// Key algorithms whose signing is offloaded, "rsa" and/or "ec".
    pub offload_key_types: BTreeSet<String>,
    pub service_id: String,
    pub cert_offload_enabled: bool,
}
