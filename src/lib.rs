//! # TLS Context Configuration
//!
//! The per-virtual-host TLS context model for a TLS terminating server that
//! selects among many certificates at handshake time (SNI).
//!
//! ## Overview
//!
//! Each `TlsContextConfig` describes one logical virtual host: which
//! certificates and delegated credentials to serve, the cipher and
//! signature algorithm policy, the ALPN/NPN advertisement, how client
//! certificates are verified, and whether private-key operations are
//! offloaded to a remote signing service. A context factory, an SNI
//! dispatcher and a key-offload client read the populated configuration;
//! this crate only describes and checks it.
//!
//! ## Features
//!
//! - **Set/Add Builders**: certificates (file or in-memory) and delegated
//!   credentials, where `set_*` replaces and `add_*` appends
//! - **Shared Defaults**: cipher, ciphersuite and sigalg strings computed
//!   once per process and shared by every context
//! - **Key Offload Gate**: `key_offload_decision` resolves local, remote
//!   signing or remote certificate retrieval per key type
//! - **TOML Configuration**: load, create and validate a file of contexts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tls_context_config::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! for context in &config.contexts {
//!     println!("{} -> {}", context.display_name(), context.key_offload_decision("rsa"));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration file loading and validation
//! - [`ssl`] - The TLS context configuration model
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup and the `CustomError` type used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, saving and validating the TOML file that lists
/// the TLS contexts of a server.
pub mod config;

/// TLS context configuration module.
///
/// Certificate and delegated credential sources, cipher policy defaults,
/// protocol advertisement, client verification and key-offload policy.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
