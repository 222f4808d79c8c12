use crate::ssl::structs::certificate_source::CertificateSource;
use crate::ssl::structs::replace_certificates::ReplaceCertificates;
use crate::ssl::structs::source_list::SourceList;
use crate::ssl::traits::certificate_setter::CertificateSetter;

impl CertificateSetter for ReplaceCertificates {
    fn set_certificate(
        &self,
        certificates: &mut SourceList<CertificateSource>,
        cert_locator: &str,
        key_locator: &str,
        password_locator: &str,
    ) {
        certificates.set(CertificateSource::file(cert_locator, key_locator, password_locator));
    }
}
