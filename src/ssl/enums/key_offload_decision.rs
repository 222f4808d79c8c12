/// Where the material for one certificate should come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyOffloadDecision {
    /// Read certificate and private key from the local source.
    LoadLocally,
    /// Fetch the certificate (and implicitly its key) from the remote service.
    RemoteCertificate { service_id: String },
    /// Load the certificate locally, perform signing on the remote service.
    RemoteSigning { service_id: String },
}
