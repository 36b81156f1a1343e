//! Cell-boundary arrays and geometric contiguity validation.
//!
//! A bounds array attaches cell-vertex coordinates to a coordinate
//! variable: the trailing axis indexes the vertices of each cell. This
//! crate owns the [`CellBounds`] construct and the [`contiguous`]
//! validator that decides whether a sequence (1-D) or quadrilateral mesh
//! (2-D) of cells tiles without gaps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod contiguity;
pub mod error;

pub use bounds::CellBounds;
pub use contiguity::{contiguous, Direction};
pub use error::BoundsError;
