use crate::ssl::structs::replace_certificates::ReplaceCertificates;
use crate::ssl::structs::security_baseline::SecurityBaseline;
use crate::ssl::traits::certificate_setter::CertificateSetter;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// TLS 1.2 and below cipher list, strongest first.
pub const SERVER_CIPHERS: &[&str] = &[
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-AES128-SHA",
    "ECDHE-ECDSA-AES256-SHA",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES128-SHA",
    "ECDHE-RSA-AES256-SHA",
    "AES128-GCM-SHA256",
    "AES256-GCM-SHA384",
    "AES128-SHA",
    "AES256-SHA",
];

/// TLS 1.3 ciphersuites.
pub const SERVER_CIPHERSUITES: &[&str] = &[
    "TLS_AES_128_GCM_SHA256",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
];

pub const SERVER_SIGALGS: &[&str] = &[
    "RSA+SHA512",
    "ECDSA+SHA512",
    "RSA+SHA384",
    "ECDSA+SHA384",
    "RSA+SHA256",
    "ECDSA+SHA256",
    "RSA-PSS+SHA512",
    "RSA-PSS+SHA384",
    "RSA-PSS+SHA256",
];

pub const DEFAULT_ECC_CURVE_NAME: &str = "prime256v1";

pub const DEFAULT_OFFLOAD_SERVICE_ID: &str = "default";

pub static PROCESS_BASELINE: Lazy<Arc<SecurityBaseline>> = Lazy::new(|| {
    let baseline = SecurityBaseline::canonical();
    log::debug!(
        "[TLS CONTEXT] Computed process security baseline ({} ciphers, {} ciphersuites, {} sigalgs)",
        SERVER_CIPHERS.len(),
        SERVER_CIPHERSUITES.len(),
        SERVER_SIGALGS.len()
    );
    Arc::new(baseline)
});

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(\*\.)?([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)*[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$")
        .expect("domain pattern is a valid regex")
});

pub fn join_names(names: &[&str]) -> String {
    names.join(":")
}

/// Accepts DNS names with an optional leading `*.` wildcard label.
pub fn is_valid_domain(domain: &str) -> bool {
    domain.len() <= 253 && DOMAIN_REGEX.is_match(domain)
}

pub fn default_certificate_setter() -> Arc<dyn CertificateSetter> {
    Arc::new(ReplaceCertificates)
}
