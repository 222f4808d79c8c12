/// Colon-joined cipher, TLS 1.3 ciphersuite and signature algorithm
/// defaults shared by every context that does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecurityBaseline {
    pub(crate) ciphers: String,
    pub(crate) ciphersuites: String,
    pub(crate) sigalgs: String,
}
