use serde::Serialize;

/// Lowest protocol version a context will negotiate.
/// Deserialization goes through `FromStr`, so any casing of `TLSv1.x` or
/// `TLS1.x` is accepted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TlsVersion {
    #[serde(rename = "TLSv1.0")]
    Tls10,
    #[serde(rename = "TLSv1.1")]
    Tls11,
    #[default]
    #[serde(rename = "TLSv1.2")]
    Tls12,
    #[serde(rename = "TLSv1.3")]
    Tls13,
}
