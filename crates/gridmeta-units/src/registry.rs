//! Process-wide intern cache for physically-equal units.

use crate::unit::Units;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

/// Intern cache that unifies physically-equal unit spellings to a single
/// shared representative.
///
/// The first registrant for a given physical magnitude becomes the
/// representative; later physically-equal units resolve to it, so
/// repeated signature computations can compare units by pointer identity
/// (`Arc::ptr_eq`). Entries live for the registry's lifetime and are
/// never evicted or mutated.
///
/// Construct one registry per process (or per test) and pass it to the
/// components that need it; there is no hidden global.
///
/// # Examples
///
/// ```
/// use gridmeta_units::{UnitRegistry, Units};
/// use std::sync::Arc;
///
/// let registry = UnitRegistry::new();
/// let a = registry.intern(&Units::parse("degrees").unwrap());
/// let b = registry.intern(&Units::parse("degrees_north").unwrap());
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct UnitRegistry {
    inner: Mutex<IndexMap<String, Arc<Units>>>,
}

impl UnitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared representative for `units`.
    ///
    /// Insert-if-absent under a mutex: concurrent callers may race to
    /// insert, but the first write wins and subsequent lookups observe it.
    pub fn intern(&self, units: &Units) -> Arc<Units> {
        let key = units.definition();
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(existing) = map.get(&key) {
            return Arc::clone(existing);
        }
        // A physically-equal unit may already be registered under a
        // different spelling; alias this key to it.
        for existing in map.values() {
            if existing.equals(units) {
                let representative = Arc::clone(existing);
                map.insert(key, Arc::clone(&representative));
                return representative;
            }
        }
        let representative = Arc::new(units.clone());
        map.insert(key, Arc::clone(&representative));
        representative
    }

    /// Number of distinct keys registered (spellings, not magnitudes).
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
