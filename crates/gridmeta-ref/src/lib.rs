//! Coordinate reference descriptors: term tables, pairwise equivalence,
//! and structural signatures.
//!
//! A coordinate reference relates the coordinate values of a coordinate
//! system to locations in a planetary reference frame. It owns a
//! [`Datum`] (the zero-point definition) and a [`CoordinateConversion`]
//! (the formula terms and domain-ancillary references), plus the set of
//! coordinate constructs it applies to.
//!
//! Two independently constructed references describing the same physical
//! grid — possibly with different units, term ordering, or unset
//! defaults — are recognized as equal by
//! [`CoordinateReference::equivalent`], and grouped or deduplicated via
//! the canonical, hashable [`StructuralSignature`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conversion;
pub mod coordinate_reference;
pub mod datum;
pub mod error;
pub mod knowledge;
pub mod signature;

pub use conversion::CoordinateConversion;
pub use coordinate_reference::CoordinateReference;
pub use datum::Datum;
pub use error::TermLookupError;
pub use signature::{SignatureBuilder, SignatureEntry, StructuralSignature};
