//! TLS context configuration module.
//!
//! Describes, per virtual host, the material and policy a TLS terminating
//! server needs to build one TLS context: certificates (from files or
//! in-memory buffers), delegated credentials, cipher and signature
//! algorithm policy, ALPN/NPN advertisement, client certificate
//! verification, and the remote key-offload policy.
//!
//! # Lifecycle
//!
//! A `TlsContextConfig` is populated once while configuration is loaded
//! (or reloaded) and handed read-only to the context factory, the SNI
//! dispatcher and the key-offload client afterwards.
//!
//! # Defaults
//!
//! Cipher, TLS 1.3 ciphersuite and signature algorithm strings default to
//! a `SecurityBaseline` computed once per process and shared by every
//! configuration that does not override them.
//!
//! # Example
//!
//! ```rust
//! use tls_context_config::ssl::structs::tls_context_config::TlsContextConfig;
//!
//! let mut context = TlsContextConfig::default();
//! context.set_certificate("/etc/ssl/example.pem", "/etc/ssl/example.key", "");
//! context.add_certificate("/etc/ssl/example-ec.pem", "/etc/ssl/example-ec.key", "");
//! context.set_next_protocols(["h2", "http/1.1"]);
//! context.domains.push("example.com".to_string());
//! assert_eq!(context.certificates.len(), 2);
//! ```

/// TLS context enumerations.
pub mod enums;

/// Implementation blocks for TLS context types.
pub mod impls;

/// Shared constants and the process-wide baseline.
#[allow(clippy::module_inception)]
pub mod ssl;

/// TLS context data structures.
pub mod structs;

/// Certificate setter strategy trait.
pub mod traits;
