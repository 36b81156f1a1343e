//! Core capabilities consumed by the gridmeta engines.
//!
//! Property storage, canonical identity resolution, unit-tagged term
//! values, tolerance comparison, domain-axis sizes, and identity
//! matchers. The engines in `gridmeta-bounds` and `gridmeta-ref` compose
//! over these narrow capabilities instead of inheriting framework
//! behavior.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod identity;
pub mod matcher;
pub mod property;
pub mod tolerance;
pub mod value;

pub use axis::{AxisSize, AxisSizeError};
pub use identity::Identified;
pub use matcher::Matcher;
pub use property::PropertyMap;
pub use tolerance::Tolerances;
pub use value::{NumericValue, TermValue};
