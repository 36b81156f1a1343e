//! Order-preserving string property storage.

use indexmap::IndexMap;

/// Attribute storage for a construct: an order-preserving map from
/// property name to string value.
///
/// This is the minimal property capability the engines consume — general
/// construct bookkeeping (containers, deprecation shims, persistence)
/// stays with the host framework.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: IndexMap<String, String>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// True when the property is present.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a property, returning its previous value.
    pub fn del(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no properties are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Produce a scratch copy with `inherited` merged underneath `self`:
    /// an explicit property always wins over an inherited one of the
    /// same name. Neither input is mutated.
    pub fn merge_under(&self, inherited: &PropertyMap) -> PropertyMap {
        let mut merged = inherited.clone();
        for (name, value) in self.iter() {
            merged.set(name, value);
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}
