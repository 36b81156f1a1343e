//! Identity matchers: explicit tagged variants instead of duck-typed
//! value probing.

use regex::Regex;

/// A predicate over identity strings.
///
/// Replaces attribute-probing dispatch ("is this a pattern object, a
/// query, or a literal?") with an explicit variant matched by
/// [`Matcher::matches`].
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Exact string equality.
    Literal(String),
    /// Regular-expression search anywhere in the candidate.
    Pattern(Regex),
    /// Inclusive numeric range; the candidate must parse as `f64`.
    Range {
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
}

impl Matcher {
    /// An exact-equality matcher.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// A regular-expression matcher.
    pub fn pattern(expr: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(expr)?))
    }

    /// An inclusive numeric range matcher.
    pub fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// Evaluate this matcher against a candidate identity.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Literal(value) => value == candidate,
            Self::Pattern(regex) => regex.is_match(candidate),
            Self::Range { min, max } => candidate
                .trim()
                .parse::<f64>()
                .map(|v| *min <= v && v <= *max)
                .unwrap_or(false),
        }
    }
}
