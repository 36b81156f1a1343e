//! Physical units for coordinate-system metadata.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`Units`] — a parsed physical unit supporting equivalence testing and
//! value conversion — and [`UnitRegistry`], the process-wide intern cache
//! that unifies physically-equal unit spellings to a single shared
//! representative.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod unit;

pub use error::UnitError;
pub use registry::UnitRegistry;
pub use unit::Units;
