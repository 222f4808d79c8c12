use crate::ssl::structs::certificate_source::CertificateSource;
use crate::ssl::structs::source_list::SourceList;
use std::fmt::Debug;

/// Decides how `TlsContextConfig::set_certificate` updates the certificate
/// list. Deployments can install their own to intercept certificate setup
/// without touching the rest of the configuration.
pub trait CertificateSetter: Debug + Send + Sync {
    fn set_certificate(
        &self,
        certificates: &mut SourceList<CertificateSource>,
        cert_locator: &str,
        key_locator: &str,
        password_locator: &str,
    );
}
