// src/models/default_map.rs
use std::collections::HashMap;
use std::collections::hash_map::Iter;
use std::hash::Hash;

/// A map that answers lookups of absent keys with a fixed default value
/// instead of `None`.
///
/// Entries are never removed. Iteration order is the underlying hash order.
#[derive(Debug, Clone)]
pub struct DefaultMap<K, V>
where
    K: Eq + Hash,
{
    entries: HashMap<K, V>,
    default: V,
}

impl<K, V> DefaultMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    #[inline]
    #[must_use]
    pub fn new(default: V) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Returns the stored value for `key`, or the default if it was never set.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &K) -> V {
        self.entries
            .get(key)
            .map_or_else(|| self.default.clone(), Clone::clone)
    }

    /// Inserts or overwrites the value for `key`.
    #[inline]
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    #[inline]
    #[must_use]
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> &V {
        &self.default
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K, V> IntoIterator for &'a DefaultMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
