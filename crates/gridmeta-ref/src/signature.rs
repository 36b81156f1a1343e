//! Hashable structural signatures for grouping coordinate references.
//!
//! A signature is a stable, order-insensitive digest of a reference's
//! identity, parameter terms, and set domain-ancillary term names.
//! References with equal signatures describe the same coordinate system
//! and can be grouped with a plain `HashMap`.

use crate::coordinate_reference::CoordinateReference;
use crate::knowledge;
use gridmeta_core::{NumericValue, TermValue, Tolerances};
use gridmeta_units::UnitRegistry;
use indexmap::IndexMap;
use std::fmt;

/// Which term table a signature entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    /// The datum.
    Datum,
    /// The coordinate conversion.
    Conversion,
}

/// A single element of a structural signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignatureEntry {
    /// The reference's canonical identity.
    Identity(String),
    /// A set parameter term and its normalised value.
    Parameter {
        /// The table the term lives in.
        table: Table,
        /// The term name.
        term: String,
        /// The normalised value.
        value: SignatureValue,
    },
    /// The name of a set domain-ancillary term. Identifier values are
    /// deliberately excluded.
    Ancillary(String),
}

/// A normalised parameter value inside a signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignatureValue {
    /// A string-valued term.
    Str(String),
    /// A numeric term after unit canonicalisation.
    Numeric {
        /// The quantised magnitudes.
        values: SigValues,
        /// The definition string of the interned units.
        units: String,
    },
}

/// Numeric magnitudes encoded for hashing.
///
/// Each value is rounded to 13 significant digits and stored as its IEEE
/// bit pattern, with negative zero folded to zero. The rounding absorbs
/// the few-ulp error introduced when equal magnitudes are reproduced
/// through unit conversion, so `38 degrees` and its radian spelling
/// encode identically.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SigValues(Vec<u64>);

impl SigValues {
    /// Encode a slice of magnitudes.
    pub fn new(values: &[f64]) -> Self {
        Self(values.iter().map(|&v| quantize(v).to_bits()).collect())
    }

    /// Decode back to floating point, for display and inspection.
    pub fn to_floats(&self) -> Vec<f64> {
        self.0.iter().map(|&bits| f64::from_bits(bits)).collect()
    }
}

impl fmt::Debug for SigValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|&bits| f64::from_bits(bits)))
            .finish()
    }
}

fn quantize(value: f64) -> f64 {
    if value == 0.0 {
        // Folds -0.0 as well.
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }
    format!("{value:.12e}").parse().unwrap_or(value)
}

/// A complete structural signature.
///
/// Entries are ordered deterministically: identity first, then datum
/// terms sorted by name, conversion terms sorted by name, and finally
/// set domain-ancillary names sorted. Two references built in different
/// insertion orders therefore produce equal signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralSignature(Vec<SignatureEntry>);

impl StructuralSignature {
    /// The entries in signature order.
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.0
    }
}

/// Computes structural signatures against a shared unit registry.
///
/// The registry unifies physically-equal unit spellings, so signatures
/// computed through the same builder (or any builder over the same
/// registry) are directly comparable.
pub struct SignatureBuilder<'r> {
    registry: &'r UnitRegistry,
    tol: Tolerances,
}

impl<'r> SignatureBuilder<'r> {
    /// A builder with the default tolerance settings.
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self::with_tolerances(registry, Tolerances::default())
    }

    /// A builder with explicit tolerance settings for the
    /// default-suppression comparison.
    pub fn with_tolerances(registry: &'r UnitRegistry, tol: Tolerances) -> Self {
        Self { registry, tol }
    }

    /// Compute the structural signature of a coordinate reference.
    ///
    /// Null terms are skipped. Numeric terms are converted to their
    /// canonical units where the conventions document any and the
    /// value's units permit it. Terms whose value equals the documented
    /// default are suppressed, so a term explicitly set to its default
    /// signs identically to the term being unset, mirroring pairwise
    /// equivalence.
    pub fn signature(&self, reference: &CoordinateReference) -> StructuralSignature {
        let mut entries = vec![SignatureEntry::Identity(reference.identity(""))];

        self.push_table(&mut entries, Table::Datum, reference.datum().parameters());
        self.push_table(
            &mut entries,
            Table::Conversion,
            reference.coordinate_conversion().parameters(),
        );

        let mut ancillaries: Vec<&String> = reference
            .coordinate_conversion()
            .domain_ancillaries()
            .iter()
            .filter(|(_, identifier)| identifier.is_some())
            .map(|(term, _)| term)
            .collect();
        ancillaries.sort();
        entries.extend(
            ancillaries
                .into_iter()
                .map(|term| SignatureEntry::Ancillary(term.clone())),
        );

        StructuralSignature(entries)
    }

    fn push_table(
        &self,
        entries: &mut Vec<SignatureEntry>,
        table: Table,
        parameters: &IndexMap<String, Option<TermValue>>,
    ) {
        let mut terms: Vec<&String> = parameters.keys().collect();
        terms.sort();

        for term in terms {
            let Some(value) = &parameters[term] else {
                continue;
            };
            match value {
                TermValue::Str(s) => entries.push(SignatureEntry::Parameter {
                    table,
                    term: term.clone(),
                    value: SignatureValue::Str(s.clone()),
                }),
                TermValue::Numeric(numeric) => {
                    let canonical = self.canonicalize(term, numeric);
                    let default = NumericValue::dimensionless(knowledge::default_value(term));
                    if self.tol.values_close(&canonical, &default) {
                        continue;
                    }
                    let units = self.registry.intern(canonical.units());
                    entries.push(SignatureEntry::Parameter {
                        table,
                        term: term.clone(),
                        value: SignatureValue::Numeric {
                            values: SigValues::new(canonical.data()),
                            units: units.definition(),
                        },
                    });
                }
            }
        }
    }

    /// Convert a value into the term's canonical units when the
    /// conventions document any and the value's units are physically
    /// equivalent to them; otherwise keep the value as tagged.
    fn canonicalize(&self, term: &str, value: &NumericValue) -> NumericValue {
        knowledge::canonical_units(term)
            .filter(|canonical| value.units().equivalent(canonical))
            .and_then(|canonical| value.convert_to(&canonical))
            .unwrap_or_else(|| value.clone())
    }
}
