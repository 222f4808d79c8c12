use serde::{Deserialize, Serialize};
use crate::ssl::structs::tls_context_config::TlsContextConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub contexts: Vec<TlsContextConfig>
}
