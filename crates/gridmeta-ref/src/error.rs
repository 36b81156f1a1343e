//! Error types for parameter-term lookup.

use std::fmt;

/// Errors arising from looking up a parameter term by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermLookupError {
    /// The term resolves in neither the datum nor the coordinate
    /// conversion. Recoverable: callers typically substitute the term's
    /// default value.
    NotFound {
        /// The requested term name.
        term: String,
    },
    /// The term resolves in both the datum and the coordinate
    /// conversion, which the data model forbids. Indicates a malformed
    /// descriptor and always propagates.
    Ambiguous {
        /// The requested term name.
        term: String,
    },
}

impl fmt::Display for TermLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { term } => write!(
                f,
                "no '{term}' parameter exists in the coordinate conversion nor the datum"
            ),
            Self::Ambiguous { term } => write!(
                f,
                "'{term}' parameter exists in both the coordinate conversion and the datum"
            ),
        }
    }
}

impl std::error::Error for TermLookupError {}
