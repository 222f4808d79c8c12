use serde::{Deserialize, Serialize};

/// A combined PEM holding a delegated credential next to its certificate.
///
/// The private key in the file is the delegated credential's key, not the
/// leaf certificate's.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelegatedCredentialSource {
    pub(crate) combined_cert_locator: String,
}
