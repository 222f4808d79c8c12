//! TLS context enumerations.

/// Client certificate verification modes.
pub mod client_verification;

/// Construction and validation errors for context configurations.
pub mod context_config_error;

/// Preferred certificate-authority lineage.
pub mod issuer_preference;

/// Outcome of the key-offload eligibility gate.
pub mod key_offload_decision;

/// TLS protocol-version floor.
pub mod tls_version;
