use serde::{Deserialize, Serialize};

/// One certificate and private key pair.
///
/// With `is_buffer` set, both locators hold the PEM contents themselves
/// instead of file paths, and `password_locator` stays empty.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CertificateSource {
    pub(crate) cert_locator: String,
    pub(crate) key_locator: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) password_locator: String,
    #[serde(default)]
    pub(crate) is_buffer: bool,
}
