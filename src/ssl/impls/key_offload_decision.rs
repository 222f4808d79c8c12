use crate::ssl::enums::key_offload_decision::KeyOffloadDecision;
use std::fmt;

impl KeyOffloadDecision {
    pub fn is_remote(&self) -> bool {
        !matches!(self, KeyOffloadDecision::LoadLocally)
    }

    pub fn service_id(&self) -> Option<&str> {
        match self {
            KeyOffloadDecision::LoadLocally => None,
            KeyOffloadDecision::RemoteCertificate { service_id }
            | KeyOffloadDecision::RemoteSigning { service_id } => Some(service_id),
        }
    }
}

impl fmt::Display for KeyOffloadDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOffloadDecision::LoadLocally => write!(f, "local"),
            KeyOffloadDecision::RemoteCertificate { service_id } => {
                write!(f, "remote-certificate({})", service_id)
            }
            KeyOffloadDecision::RemoteSigning { service_id } => {
                write!(f, "remote-signing({})", service_id)
            }
        }
    }
}
