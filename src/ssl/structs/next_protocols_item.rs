use serde::{Deserialize, Serialize};

/// A weighted list of protocol names advertised through ALPN/NPN.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextProtocolsItem {
    pub weight: u32,
    pub protocols: Vec<String>,
}
