use crate::ssl::enums::client_verification::ClientVerification;
use crate::ssl::enums::context_config_error::ContextConfigError;
use crate::ssl::enums::issuer_preference::IssuerPreference;
use crate::ssl::enums::key_offload_decision::KeyOffloadDecision;
use crate::ssl::enums::tls_version::TlsVersion;
use crate::ssl::ssl::{default_certificate_setter, is_valid_domain, DEFAULT_ECC_CURVE_NAME};
use crate::ssl::structs::certificate_source::CertificateSource;
use crate::ssl::structs::delegated_credential_source::DelegatedCredentialSource;
use crate::ssl::structs::key_offload_policy::KeyOffloadPolicy;
use crate::ssl::structs::next_protocols_item::NextProtocolsItem;
use crate::ssl::structs::security_baseline::SecurityBaseline;
use crate::ssl::structs::source_list::SourceList;
use crate::ssl::structs::tls_context_config::TlsContextConfig;
use crate::ssl::traits::certificate_setter::CertificateSetter;
use log::{debug, warn};
use std::sync::Arc;

impl Default for TlsContextConfig {
    fn default() -> Self {
        Self::with_baseline(&SecurityBaseline::process())
    }
}

impl TlsContextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration whose cipher, ciphersuite and sigalg strings come
    /// from `baseline` instead of the process baseline.
    pub fn with_baseline(baseline: &SecurityBaseline) -> Self {
        Self {
            certificates: SourceList::new(),
            delegated_credentials: SourceList::new(),
            ssl_version: TlsVersion::Tls12,
            session_cache_enabled: true,
            session_ticket_enabled: true,
            ssl_ciphers: baseline.ciphers().to_string(),
            ssl_ciphersuites: baseline.ciphersuites().to_string(),
            sig_algs: baseline.sigalgs().to_string(),
            ecc_curve_name: DEFAULT_ECC_CURVE_NAME.to_string(),
            next_protocols: Vec::new(),
            is_local_private_key: true,
            is_default: false,
            client_ca_file: String::new(),
            client_ca_files: Vec::new(),
            client_verification: ClientVerification::always,
            key_offload: KeyOffloadPolicy::default(),
            offload_disabled: true,
            domains: Vec::new(),
            prefer_prod_ca_issued_cert: false,
            issuer_preference: IssuerPreference::public_ca,
            session_context: None,
            alpn_allow_mismatch: true,
            certificate_setter: default_certificate_setter(),
        }
    }

    pub fn with_certificate_setter(mut self, setter: Arc<dyn CertificateSetter>) -> Self {
        self.certificate_setter = setter;
        self
    }

    pub fn certificate_setter(&self) -> &Arc<dyn CertificateSetter> {
        &self.certificate_setter
    }

    pub fn set_certificate(&mut self, cert_path: &str, key_path: &str, password_path: &str) {
        let setter = Arc::clone(&self.certificate_setter);
        setter.set_certificate(&mut self.certificates, cert_path, key_path, password_path);
        if self.certificates.is_empty() {
            warn!("[TLS CONTEXT] Certificate setter {:?} left the certificate list empty", setter);
        }
        debug!("[TLS CONTEXT] Set certificate {} (now {} entries)", cert_path, self.certificates.len());
    }

    pub fn add_certificate(&mut self, cert_path: &str, key_path: &str, password_path: &str) {
        self.certificates.add(CertificateSource::file(cert_path, key_path, password_path));
        debug!("[TLS CONTEXT] Added certificate {} (now {} entries)", cert_path, self.certificates.len());
    }

    pub fn set_certificate_buf(&mut self, cert: &str, key: &str) {
        self.certificates.set(CertificateSource::buffer(cert, key));
        debug!("[TLS CONTEXT] Set in-memory certificate (now {} entries)", self.certificates.len());
    }

    pub fn add_certificate_buf(&mut self, cert: &str, key: &str) {
        self.certificates.add(CertificateSource::buffer(cert, key));
        debug!("[TLS CONTEXT] Added in-memory certificate (now {} entries)", self.certificates.len());
    }

    pub fn set_delegated_credential(&mut self, combined_cert_path: &str) {
        self.delegated_credentials.set(DelegatedCredentialSource::new(combined_cert_path));
        debug!("[TLS CONTEXT] Set delegated credential {} (now {} entries)", combined_cert_path, self.delegated_credentials.len());
    }

    pub fn add_delegated_credential(&mut self, combined_cert_path: &str) {
        self.delegated_credentials.add(DelegatedCredentialSource::new(combined_cert_path));
        debug!("[TLS CONTEXT] Added delegated credential {} (now {} entries)", combined_cert_path, self.delegated_credentials.len());
    }

    /// Advertises `protocols` in order as a single entry of weight 1.
    /// An empty input still installs the entry; it carries no names and
    /// `next_protocols_enabled` reports advertisement as off.
    pub fn set_next_protocols<I, S>(&mut self, protocols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_protocols.clear();
        self.next_protocols.push(NextProtocolsItem::new(1, protocols));
        debug!("[TLS CONTEXT] Set next protocols {:?}", self.next_protocols[0].protocols);
    }

    pub fn next_protocols_enabled(&self) -> bool {
        self.next_protocols.iter().any(|item| !item.protocols.is_empty())
    }

    /// Where the material for a certificate with a `key_type` key comes from.
    pub fn key_offload_decision(&self, key_type: &str) -> KeyOffloadDecision {
        if self.offload_disabled {
            return KeyOffloadDecision::LoadLocally;
        }
        if self.key_offload.cert_offload_enabled {
            return KeyOffloadDecision::RemoteCertificate {
                service_id: self.key_offload.service_id.clone(),
            };
        }
        if self.key_offload.offloads_key_type(key_type) {
            return KeyOffloadDecision::RemoteSigning {
                service_id: self.key_offload.service_id.clone(),
            };
        }
        KeyOffloadDecision::LoadLocally
    }

    pub fn session_context_or<'a>(&'a self, listener_name: &'a str) -> &'a str {
        self.session_context.as_deref().unwrap_or(listener_name)
    }

    /// `client_ca_file` followed by `client_ca_files`, skipping an unset single file.
    pub fn client_ca_files_all(&self) -> Vec<&str> {
        std::iter::once(self.client_ca_file.as_str())
            .filter(|file| !file.is_empty())
            .chain(self.client_ca_files.iter().map(String::as_str))
            .collect()
    }

    pub fn has_client_trust(&self) -> bool {
        !self.client_ca_files_all().is_empty()
    }

    /// Structural problems a context factory could not resolve without guessing.
    pub fn validate(&self) -> Vec<ContextConfigError> {
        let mut errors = Vec::new();
        if self.certificates.iter().any(|certificate| certificate.is_buffer() && certificate.has_password()) {
            errors.push(ContextConfigError::PasswordWithBuffer);
        }
        for (position, domain) in self.domains.iter().enumerate() {
            if domain.is_empty() {
                errors.push(ContextConfigError::EmptyDomain(position));
            } else if !is_valid_domain(domain) {
                errors.push(ContextConfigError::InvalidDomain(domain.clone()));
            }
        }
        if self.ssl_ciphers.is_empty() {
            errors.push(ContextConfigError::EmptyPolicyString("cipher"));
        }
        if self.ssl_ciphersuites.is_empty() {
            errors.push(ContextConfigError::EmptyPolicyString("ciphersuite"));
        }
        if self.sig_algs.is_empty() {
            errors.push(ContextConfigError::EmptyPolicyString("sigalg"));
        }
        errors
    }

    /// First domain, or `"<unnamed>"`, for log lines.
    pub fn display_name(&self) -> &str {
        self.domains.first().map(String::as_str).unwrap_or("<unnamed>")
    }
}
