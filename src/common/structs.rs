//! Common data structures.

/// Free-form error used by the binary and the configuration loader.
pub mod custom_error;
