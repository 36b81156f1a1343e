//! The coordinate reference descriptor and pairwise equivalence.

use crate::conversion::CoordinateConversion;
use crate::datum::Datum;
use crate::error::TermLookupError;
use crate::knowledge;
use gridmeta_core::{Matcher, NumericValue, TermValue, Tolerances};
use indexmap::{IndexMap, IndexSet};

/// A coordinate reference construct.
///
/// Owns exactly one [`Datum`] and one [`CoordinateConversion`] (cloned
/// together with the reference), plus the set of coordinate-construct
/// identifiers the reference applies to. A parameter term must not be
/// resolvable in both the datum and the conversion at once; combined
/// lookup enforces this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateReference {
    datum: Datum,
    conversion: CoordinateConversion,
    coordinates: IndexSet<String>,
    nc_variable: Option<String>,
}

impl CoordinateReference {
    /// Create an empty coordinate reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// The datum.
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Mutable access to the datum.
    pub fn datum_mut(&mut self) -> &mut Datum {
        &mut self.datum
    }

    /// The coordinate conversion.
    pub fn coordinate_conversion(&self) -> &CoordinateConversion {
        &self.conversion
    }

    /// Mutable access to the coordinate conversion.
    pub fn coordinate_conversion_mut(&mut self) -> &mut CoordinateConversion {
        &mut self.conversion
    }

    /// The coordinate-construct identifiers this reference applies to,
    /// in insertion order.
    pub fn coordinates(&self) -> &IndexSet<String> {
        &self.coordinates
    }

    /// Add a coordinate-construct identifier.
    pub fn set_coordinate(&mut self, identifier: impl Into<String>) {
        self.coordinates.insert(identifier.into());
    }

    /// Remove a coordinate-construct identifier.
    pub fn del_coordinate(&mut self, identifier: &str) -> bool {
        self.coordinates.shift_remove(identifier)
    }

    /// Set the persisted grid-mapping variable name.
    pub fn set_nc_variable(&mut self, name: impl Into<String>) {
        self.nc_variable = Some(name.into());
    }

    /// The persisted grid-mapping variable name, if any.
    pub fn nc_variable(&self) -> Option<&str> {
        self.nc_variable.as_deref()
    }

    /// Coordinate reference constructs never carry cell bounds.
    pub fn has_bounds(&self) -> bool {
        false
    }

    /// Combined parameter lookup over the datum and the conversion.
    ///
    /// `Err(Ambiguous)` when the term is present in both tables — a
    /// malformed descriptor — and `Err(NotFound)` when it is present in
    /// neither.
    pub fn parameter(&self, term: &str) -> Result<Option<&TermValue>, TermLookupError> {
        match (self.conversion.parameter(term), self.datum.parameter(term)) {
            (Ok(_), Ok(_)) => Err(TermLookupError::Ambiguous {
                term: term.to_string(),
            }),
            (Ok(value), Err(_)) | (Err(_), Ok(value)) => Ok(value),
            (Err(_), Err(_)) => Err(TermLookupError::NotFound {
                term: term.to_string(),
            }),
        }
    }

    /// Combined lookup recovering `NotFound` with a caller default.
    /// Ambiguity still propagates.
    pub fn parameter_or<'a>(
        &'a self,
        term: &str,
        default: Option<&'a TermValue>,
    ) -> Result<Option<&'a TermValue>, TermLookupError> {
        match self.parameter(term) {
            Err(TermLookupError::NotFound { .. }) => Ok(default),
            other => other,
        }
    }

    /// A string parameter looked up in the conversion first, then the
    /// datum.
    fn string_parameter(&self, term: &str) -> Option<&str> {
        for table in [self.conversion.parameters(), self.datum.parameters()] {
            if let Some(Some(TermValue::Str(value))) = table.get(term) {
                return Some(value);
            }
        }
        None
    }

    /// The canonical identity of the reference.
    ///
    /// First found of: the `standard_name` parameter; the
    /// `grid_mapping_name` parameter as `"grid_mapping_name=<value>"`;
    /// the persisted variable name as `"ncvar%<name>"`; the caller
    /// default.
    pub fn identity(&self, default: &str) -> String {
        if let Some(value) = self.string_parameter("standard_name") {
            return value.to_string();
        }
        if let Some(value) = self.string_parameter("grid_mapping_name") {
            return format!("grid_mapping_name={value}");
        }
        if let Some(name) = &self.nc_variable {
            return format!("ncvar%{name}");
        }
        default.to_string()
    }

    /// All identities the reference answers to: the canonical identity
    /// plus the raw `grid_mapping_name` and `standard_name` parameter
    /// values.
    pub fn identities(&self) -> Vec<String> {
        let mut out = Vec::new();
        let canonical = self.identity("");
        if !canonical.is_empty() {
            out.push(canonical);
        }
        for term in ["grid_mapping_name", "standard_name"] {
            if let Some(value) = self.string_parameter(term) {
                let value = value.to_string();
                if !out.contains(&value) {
                    out.push(value);
                }
            }
        }
        out
    }

    /// Whether any of the given matchers matches any of this
    /// reference's identities. No matchers at all matches everything.
    pub fn match_by_identity(&self, matchers: &[Matcher]) -> bool {
        if matchers.is_empty() {
            return true;
        }
        let identities = self.identities();
        matchers
            .iter()
            .any(|m| identities.iter().any(|id| m.matches(id)))
    }

    /// Re-map coordinate and domain-ancillary identifiers through a
    /// rename table.
    ///
    /// An identifier mapped to `None` is removed (a nulled ancillary
    /// slot, a dropped coordinate). With `strict`, identifiers missing
    /// from the map are also nulled; otherwise they are kept unchanged.
    pub fn change_identifiers(
        &mut self,
        identity_map: &IndexMap<String, Option<String>>,
        coordinate: bool,
        ancillary: bool,
        strict: bool,
    ) {
        if identity_map.is_empty() && !strict {
            return;
        }

        if ancillary {
            let terms: Vec<(String, Option<String>)> = self
                .conversion
                .domain_ancillaries()
                .iter()
                .map(|(term, id)| (term.clone(), id.clone()))
                .collect();
            for (term, identifier) in terms {
                let renamed = match identifier {
                    Some(id) => match identity_map.get(&id) {
                        Some(mapped) => mapped.clone(),
                        None if strict => None,
                        None => Some(id),
                    },
                    None => None,
                };
                self.conversion.set_domain_ancillary(term, renamed);
            }
        }

        if coordinate {
            let mut renamed = IndexSet::new();
            for id in self.coordinates.drain(..) {
                let mapped = match identity_map.get(&id) {
                    Some(m) => m.clone(),
                    None if strict => None,
                    None => Some(id),
                };
                if let Some(new_id) = mapped {
                    renamed.insert(new_id);
                }
            }
            self.coordinates = renamed;
        }
    }

    /// Whether two coordinate references are logically equal.
    ///
    /// Checks, in order, each short-circuiting to `false`: identity
    /// equality; identical domain-ancillary term-name sets with
    /// per-term set/unset agreement (ancillary identifier *values* are
    /// not compared); tolerance comparison over the union of conversion
    /// parameter terms, substituting documented defaults for one-sided
    /// unset terms; the same over datum parameter terms. Numeric
    /// comparison is unit-aware, so a value in degrees equals the same
    /// angle in radians.
    ///
    /// `Tolerances::default()` reproduces the process-wide default
    /// tolerance settings.
    pub fn equivalent(&self, other: &Self, tol: &Tolerances) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        if self.identity("") != other.identity("") {
            return false;
        }

        let ancillaries0 = self.conversion.domain_ancillaries();
        let ancillaries1 = other.conversion.domain_ancillaries();
        if ancillaries0.len() != ancillaries1.len() {
            return false;
        }
        for (term, value0) in ancillaries0 {
            let Some(value1) = ancillaries1.get(term) else {
                return false;
            };
            if value0.is_some() != value1.is_some() {
                return false;
            }
        }

        if !tables_equivalent(
            self.conversion.parameters(),
            other.conversion.parameters(),
            tol,
        ) {
            return false;
        }

        tables_equivalent(self.datum.parameters(), other.datum.parameters(), tol)
    }
}

/// Compare two parameter tables over the union of their term names.
fn tables_equivalent(
    table0: &IndexMap<String, Option<TermValue>>,
    table1: &IndexMap<String, Option<TermValue>>,
    tol: &Tolerances,
) -> bool {
    let mut terms: IndexSet<&str> = table0.keys().map(String::as_str).collect();
    terms.extend(table1.keys().map(String::as_str));

    for term in terms {
        let value0 = table0.get(term).and_then(Option::as_ref);
        let value1 = table1.get(term).and_then(Option::as_ref);
        if !term_equivalent(term, value0, value1, tol) {
            return false;
        }
    }
    true
}

/// Compare a single term's values, substituting the documented default
/// for a one-sided unset term.
fn term_equivalent(
    term: &str,
    value0: Option<&TermValue>,
    value1: Option<&TermValue>,
    tol: &Tolerances,
) -> bool {
    match (value0, value1) {
        // Unset on both sides.
        (None, None) => true,
        (Some(TermValue::Str(a)), Some(TermValue::Str(b))) => a == b,
        (Some(TermValue::Numeric(a)), Some(TermValue::Numeric(b))) => tol.values_close(a, b),
        (Some(_), Some(_)) => false,
        (None, Some(value)) | (Some(value), None) => match value {
            TermValue::Str(_) => false,
            TermValue::Numeric(numeric) => {
                let default = NumericValue::dimensionless(knowledge::default_value(term));
                tol.values_close(numeric, &default)
            }
        },
    }
}
