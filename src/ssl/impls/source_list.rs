use crate::ssl::structs::source_list::SourceList;

impl<T> Default for SourceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SourceList<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Replaces every entry with `entry`.
    pub fn set(&mut self, entry: T) {
        self.entries.clear();
        self.add(entry);
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T> From<Vec<T>> for SourceList<T> {
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<'a, T> IntoIterator for &'a SourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
