//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher driven by the configured log level)
//! - Log level parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common utilities.
mod tests;
