//! Numeric equality under relative/absolute tolerance.

use crate::value::NumericValue;

/// Relative and absolute tolerances for numeric comparison.
///
/// The defaults are machine epsilon for both. Construct once and pass
/// explicitly to the comparisons that need it; there is no hidden
/// global.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Relative tolerance.
    pub rtol: f64,
    /// Absolute tolerance.
    pub atol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            rtol: f64::EPSILON,
            atol: f64::EPSILON,
        }
    }
}

impl Tolerances {
    /// Create tolerances with explicit values.
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Scalar closeness: `|a - b| <= atol + rtol * |b|`.
    ///
    /// Exactly-equal values (including equal infinities) always compare
    /// close; NaN never does.
    pub fn close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Elementwise closeness with scalar broadcast.
    ///
    /// Slices of equal length compare elementwise; a length-1 slice
    /// broadcasts against the other. Any other length mismatch is a
    /// shape mismatch and compares unequal.
    pub fn allclose(&self, a: &[f64], b: &[f64]) -> bool {
        match (a.len(), b.len()) {
            (x, y) if x == y => a.iter().zip(b).all(|(&x, &y)| self.close(x, y)),
            (1, _) => b.iter().all(|&y| self.close(a[0], y)),
            (_, 1) => a.iter().all(|&x| self.close(x, b[0])),
            _ => false,
        }
    }

    /// Unit-aware closeness of two numeric values.
    ///
    /// When the units are physically equivalent the right-hand side is
    /// converted into the left's units first; this includes
    /// dimensionless-but-scaled pairs such as `percent` against `1`.
    /// When they are not equivalent, a dimensionless side (such as a
    /// substituted default) compares raw magnitudes against the other
    /// side; otherwise the values compare unequal.
    pub fn values_close(&self, a: &NumericValue, b: &NumericValue) -> bool {
        if let Some(converted) = b.convert_to(a.units()) {
            return self.allclose(a.data(), converted.data());
        }
        if a.units().is_dimensionless() || b.units().is_dimensionless() {
            return self.allclose(a.data(), b.data());
        }
        false
    }
}
