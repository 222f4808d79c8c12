//! Implementation blocks for TLS context types.

pub mod certificate_source;
pub mod client_verification;
pub mod delegated_credential_source;
pub mod issuer_preference;
pub mod key_offload_decision;
pub mod key_offload_policy;
pub mod next_protocols_item;
pub mod replace_certificates;
pub mod security_baseline;
pub mod source_list;
pub mod tls_context_config;
pub mod tls_version;
