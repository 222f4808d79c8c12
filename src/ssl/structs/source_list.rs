use serde::{Deserialize, Serialize};

/// Ordered list where `set` replaces everything and `add` appends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SourceList<T> {
    pub(crate) entries: Vec<T>,
}
