//! Error types for bounds validation.

use std::fmt;

/// Errors arising from contiguity checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// The array's rank and vertex count fall outside the supported
    /// 1-D and 2-D quadrilateral cases.
    UnsupportedShape {
        /// Number of array dimensions (including the trailing vertex axis).
        ndim: usize,
        /// Size of the trailing vertex axis.
        nbounds: usize,
    },
    /// Overlap checking was requested for a 2-D quadrilateral mesh,
    /// where overlap is geometrically undecidable.
    OverlapUndecidable,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShape { ndim, nbounds } => write!(
                f,
                "can't tell if bounds with {ndim} dimensions and {nbounds} vertices are contiguous"
            ),
            Self::OverlapUndecidable => {
                write!(f, "can't tell if 2-d bounds overlap")
            }
        }
    }
}

impl std::error::Error for BoundsError {}
