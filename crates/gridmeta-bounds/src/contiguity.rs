//! The cell-boundary contiguity algorithm.

use crate::error::BoundsError;
use ndarray::{ArrayD, ArrayView2, ArrayView3, Ix2, Ix3};

/// Coordinate direction of a 1-D bounds sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Cell values increase along the axis.
    Increasing,
    /// Cell values decrease along the axis.
    Decreasing,
}

/// Return whether the cells described by a bounds array are contiguous.
///
/// The trailing axis of `bounds` indexes the vertices of each cell.
/// Supported shapes:
///
/// - any array with zero cells or a single cell is trivially
///   contiguous;
/// - 1-D cells (at most two vertices, at most two dimensions): with
///   `overlap = false` each cell's last vertex must exactly equal the
///   next cell's first vertex; with `overlap = true` boundaries may
///   coincide or overlap but never gap, judged against `direction`
///   (inferred from the first cell when `None`);
/// - a 2-D quadrilateral mesh (exactly two non-trailing dimensions,
///   four vertices): cells are checked pairwise for exact shared edges;
///   `overlap = true` is undecidable here and is an error.
///
/// The 2-D case assumes the fixed vertex winding in which vertex 1 lies
/// on the edge shared with the cell to the right and vertex 3 on the
/// edge shared with the cell below. Meshes using a different winding
/// will fail the check rather than being detected; callers must supply
/// this ordering.
///
/// Equality in the strict and 2-D checks is exact value equality, not
/// tolerance-based.
///
/// # Examples
///
/// ```
/// use gridmeta_bounds::contiguous;
/// use ndarray::array;
///
/// let bounds = array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]].into_dyn();
/// assert_eq!(contiguous(&bounds, false, None), Ok(true));
///
/// let gapped = array![[0.0, 1.0], [1.5, 2.0], [2.0, 3.0]].into_dyn();
/// assert_eq!(contiguous(&gapped, false, None), Ok(false));
/// ```
pub fn contiguous(
    bounds: &ArrayD<f64>,
    overlap: bool,
    direction: Option<Direction>,
) -> Result<bool, BoundsError> {
    let ndim = bounds.ndim();
    let nbounds = match bounds.shape().last() {
        Some(&n) if n > 0 => n,
        _ => return Err(BoundsError::UnsupportedShape { ndim, nbounds: 0 }),
    };

    // A single cell cannot violate contiguity.
    if bounds.len() == nbounds {
        return Ok(true);
    }

    if nbounds == 4 && ndim == 3 {
        if overlap {
            return Err(BoundsError::OverlapUndecidable);
        }
        let mesh = bounds
            .view()
            .into_dimensionality::<Ix3>()
            .map_err(|_| BoundsError::UnsupportedShape { ndim, nbounds })?;
        return Ok(mesh_contiguous(&mesh));
    }

    if nbounds > 2 || ndim > 2 {
        return Err(BoundsError::UnsupportedShape { ndim, nbounds });
    }

    // Remaining case: a sequence of 1-D cells, shape (ncells, nbounds).
    let cells = bounds
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| BoundsError::UnsupportedShape { ndim, nbounds })?;
    if overlap {
        Ok(sequence_overlapping(&cells, direction))
    } else {
        Ok(sequence_strict(&cells))
    }
}

/// Strict 1-D contiguity: each cell's end exactly equals the next
/// cell's start. Zero or one cells are trivially contiguous.
fn sequence_strict(cells: &ArrayView2<'_, f64>) -> bool {
    let last = cells.ncols() - 1;
    for i in 1..cells.nrows() {
        if cells[[i, 0]] != cells[[i - 1, last]] {
            return false;
        }
    }
    true
}

/// Overlapping 1-D contiguity: the next cell's start may coincide with
/// or overlap the current cell's end, but never gap in the direction of
/// the axis.
fn sequence_overlapping(cells: &ArrayView2<'_, f64>, direction: Option<Direction>) -> bool {
    if cells.nrows() == 0 {
        return true;
    }
    let last = cells.ncols() - 1;
    let direction = direction.unwrap_or_else(|| {
        if cells[[0, 0]] < cells[[0, last]] {
            Direction::Increasing
        } else {
            Direction::Decreasing
        }
    });
    for i in 1..cells.nrows() {
        let end = cells[[i - 1, last]];
        let next_start = cells[[i, 0]];
        let ok = match direction {
            Direction::Increasing => next_start <= end,
            Direction::Decreasing => next_start >= end,
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Exact edge matching over a quadrilateral mesh, shape (rows, cols, 4).
///
/// Every adjacent horizontal and vertical pair is examined, including
/// the final row and column.
fn mesh_contiguous(mesh: &ArrayView3<'_, f64>) -> bool {
    let (rows, cols) = (mesh.shape()[0], mesh.shape()[1]);

    for j in 0..rows {
        for i in 0..cols.saturating_sub(1) {
            // Cells (j, i) and (j, i+1) share their vertical edge.
            if mesh[[j, i, 1]] != mesh[[j, i + 1, 0]] || mesh[[j, i, 2]] != mesh[[j, i + 1, 3]] {
                return false;
            }
        }
    }
    for j in 0..rows.saturating_sub(1) {
        for i in 0..cols {
            // Cells (j, i) and (j+1, i) share their horizontal edge.
            if mesh[[j, i, 3]] != mesh[[j + 1, i, 0]] || mesh[[j, i, 2]] != mesh[[j + 1, i, 1]] {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3, ArrayD};
    use proptest::prelude::*;

    /// Build a quadrilateral mesh from vertex grids of shape
    /// (rows+1, cols+1), using the fixed winding: vertex 0 top-left,
    /// 1 top-right, 2 bottom-right, 3 bottom-left.
    fn mesh_from_grid(verts: &dyn Fn(usize, usize) -> f64, rows: usize, cols: usize) -> ArrayD<f64> {
        let mut mesh = Array3::<f64>::zeros((rows, cols, 4));
        for j in 0..rows {
            for i in 0..cols {
                mesh[[j, i, 0]] = verts(j, i);
                mesh[[j, i, 1]] = verts(j, i + 1);
                mesh[[j, i, 2]] = verts(j + 1, i + 1);
                mesh[[j, i, 3]] = verts(j + 1, i);
            }
        }
        mesh.into_dyn()
    }

    // ── 1-D strict contiguity ───────────────────────────────────

    #[test]
    fn strict_contiguous_sequence() {
        let bounds = array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]].into_dyn();
        assert_eq!(contiguous(&bounds, false, None), Ok(true));
    }

    #[test]
    fn strict_gap_is_not_contiguous() {
        let bounds = array![[0.0, 1.0], [1.5, 2.0], [2.0, 3.0]].into_dyn();
        assert_eq!(contiguous(&bounds, false, None), Ok(false));
    }

    #[test]
    fn strict_overlap_is_not_contiguous() {
        let bounds = array![[0.0, 1.0], [0.5, 2.0]].into_dyn();
        assert_eq!(contiguous(&bounds, false, None), Ok(false));
    }

    #[test]
    fn decreasing_strict_sequence() {
        let bounds = array![[3.0, 2.0], [2.0, 1.0], [1.0, 0.0]].into_dyn();
        assert_eq!(contiguous(&bounds, false, None), Ok(true));
    }

    // ── 1-D overlap mode ────────────────────────────────────────

    #[test]
    fn overlap_allows_overlapping_cells() {
        let bounds = array![[0.0, 1.0], [0.5, 2.0], [1.5, 3.0]].into_dyn();
        assert_eq!(contiguous(&bounds, true, None), Ok(true));
    }

    #[test]
    fn overlap_rejects_gaps() {
        let bounds = array![[0.0, 1.0], [1.5, 2.0]].into_dyn();
        assert_eq!(contiguous(&bounds, true, None), Ok(false));
    }

    #[test]
    fn overlap_infers_decreasing_direction() {
        let bounds = array![[3.0, 2.0], [2.5, 1.0], [1.0, 0.0]].into_dyn();
        assert_eq!(contiguous(&bounds, true, None), Ok(true));
    }

    #[test]
    fn overlap_explicit_direction_overrides_inference() {
        // Coincident boundaries pass in either direction.
        let bounds = array![[0.0, 1.0], [1.0, 2.0]].into_dyn();
        assert_eq!(
            contiguous(&bounds, true, Some(Direction::Increasing)),
            Ok(true)
        );
        assert_eq!(
            contiguous(&bounds, true, Some(Direction::Decreasing)),
            Ok(true)
        );
        // An overlapping increasing pair fails under a decreasing rule.
        let overlapping = array![[0.0, 1.0], [0.5, 2.0]].into_dyn();
        assert_eq!(
            contiguous(&overlapping, true, Some(Direction::Decreasing)),
            Ok(false)
        );
    }

    // ── Single-cell arrays ──────────────────────────────────────

    #[test]
    fn zero_cells_are_contiguous() {
        let empty = ndarray::Array2::<f64>::zeros((0, 2)).into_dyn();
        assert_eq!(contiguous(&empty, false, None), Ok(true));
        assert_eq!(contiguous(&empty, true, None), Ok(true));
        assert_eq!(
            contiguous(&empty, true, Some(Direction::Decreasing)),
            Ok(true)
        );

        let empty_mesh = Array3::<f64>::zeros((0, 3, 4)).into_dyn();
        assert_eq!(contiguous(&empty_mesh, false, None), Ok(true));
    }

    #[test]
    fn single_cell_is_always_contiguous() {
        let one = array![[0.0, 1.0]].into_dyn();
        assert_eq!(contiguous(&one, false, None), Ok(true));
        assert_eq!(contiguous(&one, true, None), Ok(true));

        // Even with many vertices or extra dimensions.
        let quad = Array3::<f64>::zeros((1, 1, 4)).into_dyn();
        assert_eq!(contiguous(&quad, true, None), Ok(true));
    }

    // ── 2-D quadrilateral meshes ────────────────────────────────

    #[test]
    fn mesh_from_shared_grid_is_contiguous() {
        let mesh = mesh_from_grid(&|j, i| (j * 10 + i) as f64, 3, 4);
        assert_eq!(contiguous(&mesh, false, None), Ok(true));
    }

    #[test]
    fn mesh_overlap_is_undecidable() {
        let mesh = mesh_from_grid(&|j, i| (j + i) as f64, 2, 2);
        assert_eq!(
            contiguous(&mesh, true, None),
            Err(BoundsError::OverlapUndecidable)
        );
    }

    #[test]
    fn mesh_detects_horizontal_mismatch() {
        let mut mesh = mesh_from_grid(&|j, i| (j * 10 + i) as f64, 2, 3);
        // Break the shared edge between (0,1) and (0,2).
        mesh[[0, 1, 1]] += 0.5;
        assert_eq!(contiguous(&mesh, false, None), Ok(false));
    }

    #[test]
    fn mesh_detects_vertical_mismatch() {
        let mut mesh = mesh_from_grid(&|j, i| (j * 10 + i) as f64, 3, 2);
        mesh[[1, 0, 3]] += 0.5;
        assert_eq!(contiguous(&mesh, false, None), Ok(false));
    }

    #[test]
    fn mesh_checks_last_row_and_column() {
        // A mismatch confined to the final row's horizontal pair.
        let mut mesh = mesh_from_grid(&|j, i| (j * 10 + i) as f64, 2, 2);
        mesh[[1, 0, 1]] += 0.5;
        assert_eq!(contiguous(&mesh, false, None), Ok(false));

        // And to the final column's vertical pair.
        let mut mesh = mesh_from_grid(&|j, i| (j * 10 + i) as f64, 2, 2);
        mesh[[0, 1, 2]] += 0.5;
        assert_eq!(contiguous(&mesh, false, None), Ok(false));
    }

    // ── Unsupported shapes ──────────────────────────────────────

    #[test]
    fn too_many_vertices_is_unsupported() {
        let bounds = array![[0.0, 1.0, 2.0], [2.0, 3.0, 4.0]].into_dyn();
        assert_eq!(
            contiguous(&bounds, false, None),
            Err(BoundsError::UnsupportedShape {
                ndim: 2,
                nbounds: 3
            })
        );
    }

    #[test]
    fn multidimensional_two_vertex_bounds_are_unsupported() {
        let bounds = ndarray::Array::from_elem(vec![2, 3, 2], 0.0);
        assert_eq!(
            contiguous(&bounds, false, None),
            Err(BoundsError::UnsupportedShape {
                ndim: 3,
                nbounds: 2
            })
        );
    }

    #[test]
    fn four_vertex_mesh_with_wrong_rank_is_unsupported() {
        let bounds = ndarray::Array::from_elem(vec![2, 2, 2, 4], 0.0);
        assert_eq!(
            contiguous(&bounds, false, None),
            Err(BoundsError::UnsupportedShape {
                ndim: 4,
                nbounds: 4
            })
        );
    }

    #[test]
    fn empty_trailing_axis_is_unsupported() {
        let bounds = ndarray::Array::from_elem(vec![3, 0], 0.0);
        assert!(matches!(
            contiguous(&bounds, false, None),
            Err(BoundsError::UnsupportedShape { .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn bounds_built_from_vertex_run_are_contiguous(
            mut verts in prop::collection::vec(-1e6f64..1e6, 3..40),
        ) {
            verts.sort_by(|a, b| a.total_cmp(b));
            verts.dedup();
            prop_assume!(verts.len() >= 3);
            let cells: Vec<[f64; 2]> = verts.windows(2).map(|w| [w[0], w[1]]).collect();
            let mut bounds = ndarray::Array2::<f64>::zeros((cells.len(), 2));
            for (i, cell) in cells.iter().enumerate() {
                bounds[[i, 0]] = cell[0];
                bounds[[i, 1]] = cell[1];
            }
            let bounds = bounds.into_dyn();
            prop_assert_eq!(contiguous(&bounds, false, None), Ok(true));
            prop_assert_eq!(contiguous(&bounds, true, None), Ok(true));
        }

        #[test]
        fn perturbing_a_shared_edge_breaks_strict_contiguity(
            n in 3usize..20,
            k in 1usize..19,
        ) {
            let k = k.min(n - 1);
            let mut bounds = ndarray::Array2::<f64>::zeros((n, 2));
            for i in 0..n {
                bounds[[i, 0]] = i as f64;
                bounds[[i, 1]] = (i + 1) as f64;
            }
            bounds[[k, 0]] += 0.25;
            let bounds = bounds.into_dyn();
            prop_assert_eq!(contiguous(&bounds, false, None), Ok(false));
        }

        #[test]
        fn generated_meshes_are_contiguous(rows in 1usize..6, cols in 1usize..6) {
            prop_assume!(rows * cols > 1);
            let mesh = mesh_from_grid(&|j, i| (j as f64) * 100.0 + i as f64, rows, cols);
            prop_assert_eq!(contiguous(&mesh, false, None), Ok(true));
        }
    }
}
