use crate::ssl::enums::client_verification::ClientVerification;
use std::fmt;

impl ClientVerification {
    /// Handshakes without a valid client certificate are rejected.
    pub fn requires_certificate(&self) -> bool {
        matches!(self, ClientVerification::always)
    }

    /// A client certificate is asked for during the handshake.
    pub fn requests_certificate(&self) -> bool {
        !matches!(self, ClientVerification::none)
    }
}

impl fmt::Display for ClientVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientVerification::always => write!(f, "always"),
            ClientVerification::if_presented => write!(f, "if_presented"),
            ClientVerification::none => write!(f, "none"),
        }
    }
}
