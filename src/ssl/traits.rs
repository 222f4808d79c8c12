//! TLS context trait definitions.

/// Pluggable behavior behind `set_certificate`.
pub mod certificate_setter;
