//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! file that lists the TLS contexts of a server.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **contexts**: one `[[contexts]]` table per virtual host, with nested
//!   `[[contexts.certificates]]`, `[[contexts.delegated_credentials]]`,
//!   `[[contexts.next_protocols]]` and `[contexts.key_offload]` tables
//!
//! Any field left out of a context takes its default, including the
//! process-wide cipher, ciphersuite and signature algorithm strings.
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_context_config::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for the configuration layer.
mod tests;
