//! The cell bounds construct.

use crate::contiguity::{contiguous, Direction};
use crate::error::BoundsError;
use gridmeta_core::{Identified, PropertyMap};
use ndarray::ArrayD;

/// Cell bounds attached to a coordinate construct.
///
/// The bounds array spans the same axes as its coordinate, plus a
/// trailing axis whose size is the number of vertices per cell. Bounds
/// carry their own optional property set, independent of — but
/// defaulting to — the owning coordinate's properties, which are
/// supplied here as inherited properties.
#[derive(Clone, Debug)]
pub struct CellBounds {
    data: ArrayD<f64>,
    properties: PropertyMap,
    inherited: PropertyMap,
    nc_variable: Option<String>,
}

impl CellBounds {
    /// Create bounds over the given vertex array.
    pub fn new(data: ArrayD<f64>) -> Self {
        Self {
            data,
            properties: PropertyMap::new(),
            inherited: PropertyMap::new(),
            nc_variable: None,
        }
    }

    /// The vertex array.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Array shape, trailing axis last.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of vertices per cell (the trailing axis size).
    pub fn vertex_count(&self) -> usize {
        self.data.shape().last().copied().unwrap_or(0)
    }

    /// Number of cells described by the array.
    pub fn cell_count(&self) -> usize {
        match self.vertex_count() {
            0 => 0,
            n => self.data.len() / n,
        }
    }

    /// The bounds' own explicit properties.
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    /// Set a property on the bounds themselves.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.set(name, value);
    }

    /// Replace the properties inherited from the owning coordinate.
    pub fn set_inherited_properties(&mut self, inherited: PropertyMap) {
        self.inherited = inherited;
    }

    /// Set the persisted variable name.
    pub fn set_nc_variable(&mut self, name: impl Into<String>) {
        self.nc_variable = Some(name.into());
    }

    /// Whether the cells are contiguous; see [`contiguous`].
    pub fn contiguous(
        &self,
        overlap: bool,
        direction: Option<Direction>,
    ) -> Result<bool, BoundsError> {
        contiguous(&self.data, overlap, direction)
    }
}

impl Identified for CellBounds {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn inherited_properties(&self) -> Option<&PropertyMap> {
        Some(&self.inherited)
    }

    fn nc_variable(&self) -> Option<&str> {
        self.nc_variable.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn simple_bounds() -> CellBounds {
        CellBounds::new(array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]].into_dyn())
    }

    #[test]
    fn shape_accessors() {
        let bounds = simple_bounds();
        assert_eq!(bounds.vertex_count(), 2);
        assert_eq!(bounds.cell_count(), 3);
        assert_eq!(bounds.shape(), &[3, 2]);
    }

    #[test]
    fn contiguous_delegates_to_checker() {
        assert_eq!(simple_bounds().contiguous(false, None), Ok(true));
    }

    #[test]
    fn identity_prefers_own_property_over_inherited() {
        let mut bounds = simple_bounds();
        bounds.set_inherited_properties(
            [("foo", "bar"), ("long_name", "Longitude")]
                .into_iter()
                .collect(),
        );
        assert_eq!(bounds.identity(""), "long_name=Longitude");

        bounds.set_property("long_name", "A different long name");
        assert_eq!(bounds.identity(""), "long_name=A different long name");
    }

    #[test]
    fn identity_falls_back_to_nc_variable() {
        let mut bounds = simple_bounds();
        bounds.set_nc_variable("lat_bnds");
        assert_eq!(bounds.identity(""), "ncvar%lat_bnds");
    }
}
