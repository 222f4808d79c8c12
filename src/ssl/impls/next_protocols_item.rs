use crate::ssl::structs::next_protocols_item::NextProtocolsItem;

impl NextProtocolsItem {
    pub fn new<I, S>(weight: u32, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weight,
            protocols: protocols.into_iter().map(Into::into).collect(),
        }
    }

    /// Protocol names in the shape of `rustls::ServerConfig::alpn_protocols`.
    pub fn to_alpn_protocols(&self) -> Vec<Vec<u8>> {
        self.protocols
            .iter()
            .map(|protocol| protocol.as_bytes().to_vec())
            .collect()
    }
}
