//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure: log level and one entry per TLS context.
pub mod configuration;
