//! The insertion-ordered [`Mapping`] and its iterators.
//!
//! Entries live in a `Vec` in insertion order, with an `FxHashMap` from key to slot
//! for constant-time lookups. Re-inserting a key overwrites its value in place, so
//! the original position is kept.

use crate::error::StoreError;
use fxhash::FxHashMap;
use std::fmt;
use tracing::trace;

/// A string-keyed associative container that remembers insertion order.
///
/// Besides the plain raising lookup ([`Mapping::get`]) it offers the two lookup
/// policies the lessons are about:
/// - [`Mapping::get_or`]: fall back to a caller default, never mutate.
/// - [`Mapping::get_or_insert_with`]: store a factory-made default on a miss.
///
/// # Example
///
/// ```rust
/// use primer_store::Mapping;
///
/// let mut glimmer = Mapping::from([("location", "Bright Moon"), ("power_source", "Moonstone")]);
/// assert!(glimmer.contains_key("location"));
/// assert!(!glimmer.contains_key("power"));
///
/// assert_eq!(*glimmer.get_or("home", &"Unknown"), "Unknown");
/// assert_eq!(glimmer.len(), 2);
///
/// glimmer.get_or_insert_with("home", || "Bright Moon Castle");
/// assert_eq!(glimmer.len(), 3);
/// ```
#[derive(Clone)]
pub struct Mapping<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> Default for Mapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Mapping<V> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: FxHashMap::default() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Presence check by key. Never mutates.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.push(key, value);
        None
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&V, StoreError> {
        self.index
            .get(key)
            .map(|&slot| &self.entries[slot].1)
            .ok_or_else(|| StoreError::key_not_found(key))
    }

    /// Mutable variant of [`Mapping::get`].
    ///
    /// # Errors
    /// Returns [`StoreError::KeyNotFound`] if the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, StoreError> {
        match self.index.get(key) {
            Some(&slot) => Ok(&mut self.entries[slot].1),
            None => Err(StoreError::key_not_found(key)),
        }
    }

    /// Returns the stored value, or `default` when the key is absent.
    ///
    /// The mapping is left untouched either way.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.index.get(key).map_or(default, |&slot| &self.entries[slot].1)
    }

    /// Returns the stored value, inserting `factory()` under `key` first if it is absent.
    ///
    /// The factory runs only on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: &str, factory: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                trace!(key, "Autovivifying missing key");
                self.push(key.to_owned(), factory())
            },
        };
        &mut self.entries[slot].1
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + Clone {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + DoubleEndedIterator + Clone {
        self.entries.iter().map(|(_, value)| value)
    }

    /// `(key, value)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter(self.entries.iter())
    }

    /// Builds a new mapping from the entries `f` keeps, transformed by `f`.
    ///
    /// The source is not modified and relative order is kept.
    #[must_use]
    pub fn filter_map<U, F>(&self, mut f: F) -> Mapping<U>
    where
        F: FnMut(&str, &V) -> Option<U>,
    {
        self.iter().filter_map(|(key, value)| f(key, value).map(|mapped| (key, mapped))).collect()
    }

    /// Collects, in order, the keys whose entries satisfy `predicate`.
    #[must_use]
    pub fn filter_keys<P>(&self, mut predicate: P) -> Vec<String>
    where
        P: FnMut(&str, &V) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| predicate(key, value))
            .map(|(key, _)| key.to_owned())
            .collect()
    }

    fn push(&mut self, key: String, value: V) -> usize {
        let slot = self.entries.len();
        self.index.insert(key.clone(), slot);
        self.entries.push((key, value));
        slot
    }
}

impl<V: fmt::Debug> fmt::Debug for Mapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Mapping<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for Mapping<V> {}

/// Renders like a dictionary literal: `{'location': 'Bright Moon'}`.
impl<V: fmt::Display> fmt::Display for Mapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{key}': {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Mapping<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Mapping<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Mapping<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Borrowing iterator over `(key, value)` pairs, see [`Mapping::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V>(std::slice::Iter<'a, (String, V)>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Mapping<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Mapping<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frosta() -> Mapping<&'static str> {
        let mut frosta = Mapping::new();
        frosta.insert("location", "Kingdom of the Snows");
        frosta.insert("power_source", "Fractal Flake");
        frosta
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut m = frosta();
        let previous = m.insert("location", "Snow Palace");
        assert_eq!(previous, Some("Kingdom of the Snows"));
        assert_eq!(m.keys().collect::<Vec<_>>(), ["location", "power_source"]);
        assert_eq!(m.get("location").ok(), Some(&"Snow Palace"));
    }

    #[test]
    fn missing_key_raises() {
        let m = frosta();
        let err = m.get("Krytis").expect_err("absent key");
        assert!(matches!(&err, StoreError::KeyNotFound { key, .. } if key == "Krytis"));
        assert_eq!(err.kind(), "KeyNotFound");
    }

    #[test]
    fn factory_only_runs_on_miss() {
        let mut m = frosta();
        let mut calls = 0;
        m.get_or_insert_with("location", || {
            calls += 1;
            "unused"
        });
        assert_eq!(calls, 0);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn preallocated_mapping_starts_empty() {
        let mut m: Mapping<u32> = Mapping::with_capacity(6);
        assert!(m.is_empty());
        m.extend([("Soldier1", 1), ("Soldier2", 2)]);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut m: Mapping<u32> = Mapping::from([("She-Ra", 1)]);
        *m.get_mut("She-Ra").expect("present") += 2;
        assert_eq!(m.get("She-Ra").ok(), Some(&3));
        assert!(m.get_mut("Catra").is_err());
    }

    #[test]
    fn display_renders_literal() {
        let glimmer = Mapping::from([("location", "Bright Moon"), ("power_source", "Moonstone")]);
        let rendered = glimmer
            .filter_map(|_, v| Some(format!("'{v}'")))
            .to_string();
        assert_eq!(rendered, "{'location': 'Bright Moon', 'power_source': 'Moonstone'}");
        assert_eq!(Mapping::<u8>::new().to_string(), "{}");
    }

    #[test]
    fn iterators_are_restartable() {
        let m = frosta();
        let keys = m.keys();
        assert_eq!(keys.clone().count(), 2);
        assert_eq!(keys.rev().next(), Some("power_source"));
        assert_eq!(m.iter().len(), 2);
        assert_eq!(m.values().copied().collect::<Vec<_>>(), ["Kingdom of the Snows", "Fractal Flake"]);
    }
}
