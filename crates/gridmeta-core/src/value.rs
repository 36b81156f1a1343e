//! Unit-tagged term values.

use gridmeta_units::Units;
use smallvec::SmallVec;

/// The value of a datum or coordinate-conversion parameter term.
#[derive(Clone, Debug, PartialEq)]
pub enum TermValue {
    /// A string-valued term (e.g. `grid_mapping_name`).
    Str(String),
    /// A scalar or vector numeric term with units.
    Numeric(NumericValue),
}

impl TermValue {
    /// The string payload, when this is a string term.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Numeric(_) => None,
        }
    }

    /// The numeric payload, when this is a numeric term.
    pub fn as_numeric(&self) -> Option<&NumericValue> {
        match self {
            Self::Str(_) => None,
            Self::Numeric(v) => Some(v),
        }
    }
}

impl From<&str> for TermValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for TermValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for TermValue {
    fn from(v: f64) -> Self {
        Self::Numeric(NumericValue::dimensionless(v))
    }
}

impl From<NumericValue> for TermValue {
    fn from(v: NumericValue) -> Self {
        Self::Numeric(v)
    }
}

/// A scalar or short vector of `f64` tagged with its units.
///
/// Scalars are stored as length-1 vectors; vectors up to four elements
/// stay inline. This is the numeric-array capability the equivalence and
/// signature engines consume — elementwise comparison with scalar
/// broadcast, plus unit conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericValue {
    data: SmallVec<[f64; 4]>,
    units: Units,
}

impl NumericValue {
    /// A scalar value with the given units.
    pub fn scalar(value: f64, units: Units) -> Self {
        Self {
            data: SmallVec::from_slice(&[value]),
            units,
        }
    }

    /// A vector value with the given units.
    pub fn vector(values: &[f64], units: Units) -> Self {
        Self {
            data: SmallVec::from_slice(values),
            units,
        }
    }

    /// A dimensionless scalar.
    pub fn dimensionless(value: f64) -> Self {
        Self::scalar(value, Units::one())
    }

    /// The stored values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The tagged units.
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for length-1 values.
    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }

    /// Never empty: constructors require at least a scalar, but the
    /// conventional pair to `len` is provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert every element into `to`, returning `None` when the units
    /// are not physically equivalent.
    pub fn convert_to(&self, to: &Units) -> Option<NumericValue> {
        let data = self
            .data
            .iter()
            .map(|&v| self.units.convert(v, to))
            .collect::<Option<SmallVec<[f64; 4]>>>()?;
        Some(NumericValue {
            data,
            units: to.clone(),
        })
    }
}
