//! Variable store: env var name -> key name inside the vault item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping of variable names to their target key in the vault item.
///
/// Backed by a `BTreeMap` so iteration, and therefore the rendered `.env`,
/// is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarStore(BTreeMap<String, String>);

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every entry of a comma separated `NAME` or `NAME:TARGET` list.
    ///
    /// Splits each entry on its first colon and trims both halves. Without
    /// a target the name is used. Existing names are overwritten.
    pub fn add(&mut self, spec: &str) {
        for entry in spec.split(',') {
            let (name, target) = match entry.split_once(':') {
                Some((name, target)) => (name.trim(), target.trim()),
                None => (entry.trim(), entry.trim()),
            };
            self.0.insert(name.to_string(), target.to_string());
        }
    }

    /// Remove every name of a comma separated list. Unknown names are ignored.
    pub fn remove(&mut self, spec: &str) {
        for name in spec.split(',') {
            self.0.remove(name.trim());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, target)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append `-suffix` to every target, leaving names untouched.
    pub(crate) fn suffix_targets(&mut self, suffix: &str) {
        for target in self.0.values_mut() {
            target.push('-');
            target.push_str(suffix);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VarStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
