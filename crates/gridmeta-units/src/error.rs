//! Error types for unit parsing.

use std::fmt;

/// Errors arising from parsing a unit specification string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// A unit atom is not in the supported vocabulary.
    UnknownUnit {
        /// The unrecognized atom.
        name: String,
    },
    /// The specification string does not follow the unit grammar.
    Malformed {
        /// The offending input.
        input: String,
    },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit { name } => write!(f, "unknown unit '{name}'"),
            Self::Malformed { input } => write!(f, "malformed unit specification '{input}'"),
        }
    }
}

impl std::error::Error for UnitError {}
