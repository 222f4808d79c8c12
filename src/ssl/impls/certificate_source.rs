use crate::ssl::enums::context_config_error::ContextConfigError;
use crate::ssl::structs::certificate_source::CertificateSource;

impl std::fmt::Debug for CertificateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_buffer {
            f.debug_struct("CertificateSource")
                .field("cert_bytes", &self.cert_locator.len())
                .field("key_bytes", &self.key_locator.len())
                .field("is_buffer", &true)
                .finish()
        } else {
            f.debug_struct("CertificateSource")
                .field("cert_path", &self.cert_locator)
                .field("key_path", &self.key_locator)
                .field("password_path", &self.password_locator)
                .field("is_buffer", &false)
                .finish()
        }
    }
}

impl CertificateSource {
    /// Checked constructor; buffer entries cannot carry a password locator.
    pub fn new(
        cert_locator: &str,
        key_locator: &str,
        password_locator: Option<&str>,
        is_buffer: bool,
    ) -> Result<Self, ContextConfigError> {
        let password_locator = password_locator.unwrap_or_default();
        if is_buffer && !password_locator.is_empty() {
            return Err(ContextConfigError::PasswordWithBuffer);
        }
        Ok(Self {
            cert_locator: cert_locator.to_string(),
            key_locator: key_locator.to_string(),
            password_locator: password_locator.to_string(),
            is_buffer,
        })
    }

    pub fn file(
        cert_path: impl Into<String>,
        key_path: impl Into<String>,
        password_path: impl Into<String>,
    ) -> Self {
        Self {
            cert_locator: cert_path.into(),
            key_locator: key_path.into(),
            password_locator: password_path.into(),
            is_buffer: false,
        }
    }

    pub fn buffer(cert: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            cert_locator: cert.into(),
            key_locator: key.into(),
            password_locator: String::new(),
            is_buffer: true,
        }
    }

    pub fn cert_locator(&self) -> &str {
        &self.cert_locator
    }

    pub fn key_locator(&self) -> &str {
        &self.key_locator
    }

    pub fn password_locator(&self) -> &str {
        &self.password_locator
    }

    pub fn is_buffer(&self) -> bool {
        self.is_buffer
    }

    pub fn has_password(&self) -> bool {
        !self.password_locator.is_empty()
    }

    pub fn has_empty_locator(&self) -> bool {
        self.cert_locator.is_empty() || self.key_locator.is_empty()
    }
}
