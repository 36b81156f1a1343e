//! Gridmeta: metadata equivalence and geometric validity checking for
//! gridded scientific datasets.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the gridmeta sub-crates. For most users, adding `gridmeta` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridmeta::prelude::*;
//! use gridmeta::units::Units;
//!
//! // A rotated-pole grid mapping with the pole latitude in degrees.
//! let mut a = CoordinateReference::new();
//! a.coordinate_conversion_mut()
//!     .set_parameter("grid_mapping_name", "rotated_latitude_longitude");
//! a.coordinate_conversion_mut().set_parameter(
//!     "grid_north_pole_latitude",
//!     NumericValue::scalar(38.0, Units::parse("degrees_north").unwrap()),
//! );
//!
//! // The same system with the pole latitude spelled in radians.
//! let mut b = a.clone();
//! b.coordinate_conversion_mut().set_parameter(
//!     "grid_north_pole_latitude",
//!     NumericValue::scalar(38.0_f64.to_radians(), Units::parse("radians").unwrap()),
//! );
//!
//! // Pairwise comparison recognizes them as the same system.
//! let tol = Tolerances::new(1e-12, 1e-12);
//! assert!(a.equivalent(&b, &tol));
//!
//! // And so does grouping by structural signature.
//! let registry = UnitRegistry::new();
//! let builder = SignatureBuilder::new(&registry);
//! assert_eq!(builder.signature(&a), builder.signature(&b));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`units`] | `gridmeta-units` | Physical units and the interning registry |
//! | [`types`] | `gridmeta-core` | Properties, term values, tolerances, identity |
//! | [`bounds`] | `gridmeta-bounds` | Cell-boundary arrays and contiguity |
//! | [`reference`] | `gridmeta-ref` | Coordinate references, equivalence, signatures |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Physical units and the interning registry (`gridmeta-units`).
///
/// [`units::Units`] values parse from CF-style spellings and compare by
/// physical equivalence; [`units::UnitRegistry`] unifies equal spellings
/// to a shared representative.
pub use gridmeta_units as units;

/// Core types shared across the workspace (`gridmeta-core`).
///
/// Property maps, unit-tagged term values, tolerance comparison, the
/// [`types::Identified`] identity chain, axis sizes, and identity
/// matchers.
pub use gridmeta_core as types;

/// Cell-boundary arrays and the contiguity validator (`gridmeta-bounds`).
///
/// [`bounds::CellBounds`] carries a boundary array with its properties;
/// [`bounds::contiguous`] decides whether adjacent cells share edges.
pub use gridmeta_bounds as bounds;

/// Coordinate reference descriptors (`gridmeta-ref`).
///
/// [`reference::CoordinateReference`] with its datum and conversion term
/// tables, pairwise [`reference::CoordinateReference::equivalent`]
/// comparison, and hashable [`reference::StructuralSignature`]s.
pub use gridmeta_ref as reference;

/// Common imports for typical gridmeta usage.
///
/// ```rust
/// use gridmeta::prelude::*;
/// ```
pub mod prelude {
    // Units
    pub use gridmeta_units::{UnitRegistry, Units};

    // Core values and comparison
    pub use gridmeta_core::{
        AxisSize, Identified, Matcher, NumericValue, PropertyMap, TermValue, Tolerances,
    };

    // Bounds
    pub use gridmeta_bounds::{contiguous, CellBounds, Direction};

    // Coordinate references
    pub use gridmeta_ref::{
        CoordinateConversion, CoordinateReference, Datum, SignatureBuilder, StructuralSignature,
    };

    // Errors
    pub use gridmeta_bounds::BoundsError;
    pub use gridmeta_core::AxisSizeError;
    pub use gridmeta_ref::TermLookupError;
    pub use gridmeta_units::UnitError;
}
