//! Grid partitioning result types.

use crate::models::{GeoPolygon, PlanarPolygon};
use crate::projection::ProjectionId;

/// One planar square of the planting lattice.
///
/// Cells are full squares of the configured edge length; a cell clipped by
/// the boundary keeps its complete square geometry. Identity is positional:
/// `index` is the stable generation-order index, `(row, col)` the lattice
/// coordinates (`col` along x, `row` along y).
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Square geometry in the grid's planar frame (meters).
    pub planar: PlanarPolygon,
    /// The same square reprojected to geographic coordinates.
    pub geographic: GeoPolygon,
}

/// The full set of cells for one partitioning request.
///
/// Derived data only: always reproducible from (boundary, cell size).
#[derive(Debug, Clone, PartialEq)]
pub struct GridResult {
    pub cells: Vec<GridCell>,
    /// Configured cell edge length in feet.
    pub cell_size_feet: f64,
    /// Number of retained cells.
    pub total_cells: usize,
    /// Width of the boundary's planar bounding box, in feet.
    pub width_feet: f64,
    /// Height of the boundary's planar bounding box, in feet.
    pub height_feet: f64,
    /// Planar frame the grid was generated in.
    pub projection: ProjectionId,
}
