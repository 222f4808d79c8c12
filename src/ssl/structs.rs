//! TLS context data structures.

/// Certificate and key locators for one identity.
pub mod certificate_source;

/// Delegated credential locators.
pub mod delegated_credential_source;

/// Remote key-offload policy.
pub mod key_offload_policy;

/// Weighted protocol advertisement entries.
pub mod next_protocols_item;

/// Default certificate setter strategy.
pub mod replace_certificates;

/// Process-wide cipher and signature algorithm defaults.
pub mod security_baseline;

/// Generic set/add list.
pub mod source_list;

/// The per-virtual-host aggregate.
pub mod tls_context_config;
