use serde::{Deserialize, Serialize};

/// A key with its value, as stored in one slot of a table.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Record<K, V> {
    key: K,
    value: V,
}

impl<K, V> Record<K, V> {
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K, V> From<Record<K, V>> for (K, V) {
    #[inline]
    fn from(record: Record<K, V>) -> Self {
        (record.key, record.value)
    }
}
