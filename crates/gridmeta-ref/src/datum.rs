//! The datum parameter table.

use crate::error::TermLookupError;
use gridmeta_core::TermValue;
use indexmap::IndexMap;

/// The zero-point / reference-frame definition of a coordinate system:
/// a mapping from parameter-term name to value.
///
/// A term may be present with a null value, which is distinct from
/// being absent: absence means "unset" and is a lookup miss, while a
/// present null participates in set/unset bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datum {
    parameters: IndexMap<String, Option<TermValue>>,
}

impl Datum {
    /// Create an empty datum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter by term name.
    ///
    /// `Err(NotFound)` when the term is absent; `Ok(None)` when present
    /// but null.
    pub fn parameter(&self, term: &str) -> Result<Option<&TermValue>, TermLookupError> {
        self.parameters
            .get(term)
            .map(Option::as_ref)
            .ok_or_else(|| TermLookupError::NotFound {
                term: term.to_string(),
            })
    }

    /// The full term table in insertion order.
    pub fn parameters(&self) -> &IndexMap<String, Option<TermValue>> {
        &self.parameters
    }

    /// Set a parameter value.
    pub fn set_parameter(&mut self, term: impl Into<String>, value: impl Into<TermValue>) {
        self.parameters.insert(term.into(), Some(value.into()));
    }

    /// Set a parameter to null (present but valueless).
    pub fn set_null_parameter(&mut self, term: impl Into<String>) {
        self.parameters.insert(term.into(), None);
    }

    /// Remove a parameter, returning its previous value.
    pub fn del_parameter(&mut self, term: &str) -> Option<Option<TermValue>> {
        self.parameters.shift_remove(term)
    }

    /// True when the term is present (set or null).
    pub fn has_parameter(&self, term: &str) -> bool {
        self.parameters.contains_key(term)
    }
}
