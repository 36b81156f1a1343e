//! The coordinate conversion: formula parameters and domain-ancillary
//! references.

use crate::error::TermLookupError;
use gridmeta_core::TermValue;
use indexmap::IndexMap;

/// The formula relating stored coordinate values to the target reference
/// frame.
///
/// Two term tables: literal-valued parameters (like
/// `grid_north_pole_latitude`) and domain-ancillary terms, whose values
/// are identifiers of other constructs (like the `orog` term of the
/// hybrid height coordinate) rather than literals. An ancillary term may
/// be set (an identifier) or null (declared but unfilled).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateConversion {
    parameters: IndexMap<String, Option<TermValue>>,
    ancillaries: IndexMap<String, Option<String>>,
}

impl CoordinateConversion {
    /// Create an empty conversion.
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

    /// The full parameter table in insertion order.
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

    /// True when the parameter term is present (set or null).
    pub fn has_parameter(&self, term: &str) -> bool {
        self.parameters.contains_key(term)
    }

    /// The domain-ancillary term table: term name to construct
    /// identifier, or `None` for a declared-but-unfilled slot.
    pub fn domain_ancillaries(&self) -> &IndexMap<String, Option<String>> {
        &self.ancillaries
    }

    /// Set a domain-ancillary term to a construct identifier.
    pub fn set_domain_ancillary(&mut self, term: impl Into<String>, identifier: Option<String>) {
        self.ancillaries.insert(term.into(), identifier);
    }

    /// Remove a domain-ancillary term, returning its previous value.
    pub fn del_domain_ancillary(&mut self, term: &str) -> Option<Option<String>> {
        self.ancillaries.shift_remove(term)
    }
}
