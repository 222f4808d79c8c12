/// Default certificate setter: clears the list, then appends one entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceCertificates;
