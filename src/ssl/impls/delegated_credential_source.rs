use crate::ssl::structs::delegated_credential_source::DelegatedCredentialSource;

impl DelegatedCredentialSource {
    pub fn new(combined_cert_path: impl Into<String>) -> Self {
        Self {
            combined_cert_locator: combined_cert_path.into(),
        }
    }

    pub fn combined_cert_locator(&self) -> &str {
        &self.combined_cert_locator
    }
}
