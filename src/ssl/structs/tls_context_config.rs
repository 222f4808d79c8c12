use crate::ssl::enums::client_verification::ClientVerification;
use crate::ssl::enums::issuer_preference::IssuerPreference;
use crate::ssl::enums::tls_version::TlsVersion;
use crate::ssl::structs::certificate_source::CertificateSource;
use crate::ssl::structs::delegated_credential_source::DelegatedCredentialSource;
use crate::ssl::structs::key_offload_policy::KeyOffloadPolicy;
use crate::ssl::structs::next_protocols_item::NextProtocolsItem;
use crate::ssl::structs::source_list::SourceList;
use crate::ssl::traits::certificate_setter::CertificateSetter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything needed to build the TLS context of one virtual host.
///
/// Populated once while loading configuration, read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TlsContextConfig {
    pub certificates: SourceList<CertificateSource>,
    pub delegated_credentials: SourceList<DelegatedCredentialSource>,
    pub ssl_version: TlsVersion,
    pub session_cache_enabled: bool,
    pub session_ticket_enabled: bool,
    pub ssl_ciphers: String,
    pub ssl_ciphersuites: String,
    pub sig_algs: String,
    pub ecc_curve_name: String,
    /// Empty means protocol negotiation is not advertised.
    pub next_protocols: Vec<NextProtocolsItem>,
    pub is_local_private_key: bool,
    /// Default context for SNI on its listener.
    pub is_default: bool,
    pub client_ca_file: String,
    pub client_ca_files: Vec<String>,
    pub client_verification: ClientVerification,
    pub key_offload: KeyOffloadPolicy,
    /// Must be false before any remote key retrieval is considered.
    pub offload_disabled: bool,
    pub domains: Vec<String>,
    /// Only meaningful while migrating from public CA certificates to the internal CA.
    pub prefer_prod_ca_issued_cert: bool,
    pub issuer_preference: IssuerPreference,
    /// Session cache namespace; the listener name is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_context: Option<String>,
    pub alpn_allow_mismatch: bool,
    #[serde(skip, default = "crate::ssl::ssl::default_certificate_setter")]
    pub(crate) certificate_setter: Arc<dyn CertificateSetter>,
}
