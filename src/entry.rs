/// A key-value pair stored in a bucket chain.
///
/// Entries are never edited in place; an overwrite replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the entry's key
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's value
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry and returns its value
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}
