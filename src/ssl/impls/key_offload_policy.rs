use crate::ssl::ssl::DEFAULT_OFFLOAD_SERVICE_ID;
use crate::ssl::structs::key_offload_policy::KeyOffloadPolicy;
use std::collections::BTreeSet;

impl Default for KeyOffloadPolicy {
    fn default() -> Self {
        Self {
            offload_key_types: BTreeSet::new(),
            service_id: DEFAULT_OFFLOAD_SERVICE_ID.to_string(),
            cert_offload_enabled: false,
        }
    }
}

impl KeyOffloadPolicy {
    pub fn offloads_key_type(&self, key_type: &str) -> bool {
        self.offload_key_types
            .iter()
            .any(|offloaded| offloaded.eq_ignore_ascii_case(key_type))
    }

    /// Nothing would be sent to the remote service under this policy.
    pub fn is_inert(&self) -> bool {
        !self.cert_offload_enabled && self.offload_key_types.is_empty()
    }
}
