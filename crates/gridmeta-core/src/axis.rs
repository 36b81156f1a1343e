//! Domain-axis sizes.

use std::fmt;

/// The size of a domain axis: a positive integer grid extent.
///
/// Comparison and arithmetic against plain integers use named methods
/// rather than operator overloads, so there is no implicit coercion:
/// `axis.equals(3)` instead of `axis == 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisSize(u64);

/// Errors from axis-size construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSizeError {
    /// Axis sizes must be at least 1.
    Zero,
    /// Subtraction would take the size below 1.
    Underflow {
        /// The current size.
        size: u64,
        /// The requested decrement.
        decrement: u64,
    },
    /// Addition overflowed the storage type.
    Overflow,
}

impl fmt::Display for AxisSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "axis size must be positive"),
            Self::Underflow { size, decrement } => {
                write!(f, "axis size {size} minus {decrement} would not be positive")
            }
            Self::Overflow => write!(f, "axis size arithmetic overflowed"),
        }
    }
}

impl std::error::Error for AxisSizeError {}

impl AxisSize {
    /// Create an axis size; zero is rejected.
    pub fn new(size: u64) -> Result<Self, AxisSizeError> {
        if size == 0 {
            return Err(AxisSizeError::Zero);
        }
        Ok(Self(size))
    }

    /// The size as a plain integer.
    pub fn get(self) -> u64 {
        self.0
    }

    /// `self == other`.
    pub fn equals(self, other: u64) -> bool {
        self.0 == other
    }

    /// `self < other`.
    pub fn less_than(self, other: u64) -> bool {
        self.0 < other
    }

    /// `self <= other`.
    pub fn less_equal(self, other: u64) -> bool {
        self.0 <= other
    }

    /// `self > other`.
    pub fn greater_than(self, other: u64) -> bool {
        self.0 > other
    }

    /// `self >= other`.
    pub fn greater_equal(self, other: u64) -> bool {
        self.0 >= other
    }

    /// A new size increased by `increment`.
    pub fn plus(self, increment: u64) -> Result<Self, AxisSizeError> {
        self.0
            .checked_add(increment)
            .map(Self)
            .ok_or(AxisSizeError::Overflow)
    }

    /// A new size decreased by `decrement`; the result must stay positive.
    pub fn minus(self, decrement: u64) -> Result<Self, AxisSizeError> {
        match self.0.checked_sub(decrement) {
            Some(v) if v > 0 => Ok(Self(v)),
            _ => Err(AxisSizeError::Underflow {
                size: self.0,
                decrement,
            }),
        }
    }
}

impl fmt::Display for AxisSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
