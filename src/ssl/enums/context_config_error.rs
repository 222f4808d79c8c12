use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextConfigError {
    #[error("Buffer-sourced certificate cannot carry a password locator")]
    PasswordWithBuffer,
    #[error("Invalid TLS version: {0}")]
    InvalidVersion(String),
    #[error("Empty domain name at position {0}")]
    EmptyDomain(usize),
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),
    #[error("Empty {0} policy string")]
    EmptyPolicyString(&'static str),
}
