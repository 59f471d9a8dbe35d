//! The merged input mapping and its layering primitives.
//!
//! [`InputSet`] is a value: every layering operation consumes the set and
//! returns an extended copy, so each gathering phase can be tested on its own
//! without any I/O. Keys are raw input names (`ADMIN_WALLET_PK`, `REDIS_HOST`,
//! ...), not only template keys, and iteration is sorted by name.

use std::collections::BTreeMap;

use crate::keys::Key;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSet {
    values: BTreeMap<String, String>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get) but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn get_key(&self, key: Key) -> Option<&str> {
        self.get(key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(key, value)` pairs sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `overlay` on top: overlay values win on conflict.
    pub fn overlay<I, K, V>(mut self, overlay: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overlay {
            self.values.insert(key.into(), value.into());
        }
        self
    }

    /// Gap-fill: insert only keys that are not already present.
    pub fn fill<I, K, V>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in answers {
            self.values.entry(key.into()).or_insert_with(|| value.into());
        }
        self
    }

    /// Gap-fill a single key.
    pub fn with_missing(self, key: &str, value: impl Into<String>) -> Self {
        self.fill([(key.to_string(), value.into())])
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        InputSet::new().overlay(iter)
    }
}
