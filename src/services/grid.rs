//! Grid partitioning over a garden boundary.
//!
//! Partitions a geographic boundary polygon into a metric lattice of
//! fixed-size square cells for planting layout. The boundary is projected
//! into its local planar frame so that a one-foot cell measures a true
//! foot on the ground regardless of latitude.
//!
//! Cells are generated on a regular lattice anchored at the minimum corner
//! of the planar bounding box, outer loop over x (columns), inner loop
//! over y (rows); that generation order defines each retained cell's
//! stable index. Any cell whose square shares area with the boundary is
//! kept whole — the planting grid over-covers the edge rather than
//! producing irregular partial cells.

use geo::{BoundingRect, Contains, Intersects, Point, Rect};
use log::debug;

use crate::error::{SpatialError, SpatialResult};
use crate::models::{GeoPolygon, GridCell, GridResult, PlanarPolygon};
use crate::projection::{self, ProjectionId};

/// Exact international foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Partition `boundary` into square cells of `cell_size_feet` edge length.
///
/// The result is deterministic: identical boundary and cell size always
/// produce the identical cell set in the same order, which is what lets a
/// persistence layer key planting data by cell index.
///
/// # Errors
///
/// * [`SpatialError::InvalidParameter`] for a non-positive or non-finite
///   cell size.
/// * [`SpatialError::InvalidGeometry`] if the boundary ring was invalid.
/// * [`SpatialError::ProjectionFailure`] for boundaries outside the
///   projectable latitude range.
///
/// A degenerate zero-extent boundary yields an empty result, not an error.
pub fn create_grid(boundary: &GeoPolygon, cell_size_feet: f64) -> SpatialResult<GridResult> {
    if !cell_size_feet.is_finite() || cell_size_feet <= 0.0 {
        return Err(SpatialError::InvalidParameter(format!(
            "cell size must be a positive number of feet, got {}",
            cell_size_feet
        )));
    }

    let (centroid_lon, centroid_lat) = boundary.centroid()?;
    let projection = ProjectionId::for_point(centroid_lon, centroid_lat)?;
    let planar = projection::to_planar(boundary, projection)?;
    let boundary_planar = planar.polygon().clone();

    let bbox = match boundary_planar.bounding_rect() {
        Some(rect) => rect,
        None => {
            return Err(SpatialError::InvalidGeometry(
                "boundary has no planar extent".to_string(),
            ))
        }
    };
    let (min, max) = (bbox.min(), bbox.max());
    let cell_m = cell_size_feet * METERS_PER_FOOT;

    let mut cells: Vec<GridCell> = Vec::new();
    let mut candidates = 0usize;
    let mut col = 0usize;
    loop {
        let x0 = min.x + col as f64 * cell_m;
        if x0 >= max.x {
            break;
        }
        let mut row = 0usize;
        loop {
            let y0 = min.y + row as f64 * cell_m;
            if y0 >= max.y {
                break;
            }
            candidates += 1;
            let square = Rect::new((x0, y0), (x0 + cell_m, y0 + cell_m)).to_polygon();
            if square.intersects(&boundary_planar) {
                let cell_planar =
                    PlanarPolygon::from_parts(square.exterior().0.clone(), projection);
                let geographic = projection::to_geographic(&cell_planar);
                cells.push(GridCell {
                    index: cells.len(),
                    row,
                    col,
                    planar: cell_planar,
                    geographic,
                });
            }
            row += 1;
        }
        col += 1;
    }

    let total_cells = cells.len();
    debug!(
        "grid for {}: {} of {} candidate cells retained at {} ft",
        projection, total_cells, candidates, cell_size_feet
    );

    Ok(GridResult {
        cells,
        cell_size_feet,
        total_cells,
        width_feet: (max.x - min.x) / METERS_PER_FOOT,
        height_feet: (max.y - min.y) / METERS_PER_FOOT,
        projection,
    })
}

/// Index of the grid cell containing the given geographic point, if any.
///
/// Regenerates the grid for `boundary` (the grid is cheap and fully
/// determined by its inputs) and tests the point against each cell's
/// geographic square.
pub fn cell_at_coordinates(
    latitude: f64,
    longitude: f64,
    boundary: &GeoPolygon,
    cell_size_feet: f64,
) -> SpatialResult<Option<usize>> {
    let grid = create_grid(boundary, cell_size_feet)?;
    let point = Point::new(longitude, latitude);
    Ok(grid
        .cells
        .iter()
        .find(|cell| cell.geographic.to_geo().contains(&point))
        .map(|cell| cell.index))
}
