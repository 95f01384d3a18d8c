//! Boundary polygon types in geographic and planar coordinates.
//!
//! A [`GeoPolygon`] is an ordered, closed ring of (longitude, latitude)
//! pairs in degrees (WGS84 datum). A [`PlanarPolygon`] is the same ring
//! after reprojection into a local planar frame (meters), tagged with the
//! projection that produced it so it is never compared across frames.
//!
//! Validation happens at construction and is never repaired: a ring with
//! fewer than four points, an open ring, or a self-intersecting ring is
//! rejected with [`SpatialError::InvalidGeometry`].

use geo::{Coord, LineString, Point, Polygon};
use geo::{Area, Centroid};

use crate::error::{SpatialError, SpatialResult};
use crate::projection::ProjectionId;

/// A validated, closed, simple ring of geographic coordinates.
///
/// Coordinates are (longitude, latitude) in degrees. The ring is immutable
/// once constructed; the engine only ever derives new geometry from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolygon {
    ring: Vec<Coord<f64>>,
}

impl GeoPolygon {
    /// Build a boundary from an ordered ring of (longitude, latitude)
    /// pairs. The first and last point must be identical.
    pub fn new(ring: Vec<(f64, f64)>) -> SpatialResult<Self> {
        let ring: Vec<Coord<f64>> = ring
            .into_iter()
            .map(|(x, y)| Coord { x, y })
            .collect();
        validate_ring(&ring)?;
        for c in &ring {
            if c.x < -180.0 || c.x > 180.0 || c.y < -90.0 || c.y > 90.0 {
                return Err(SpatialError::InvalidGeometry(format!(
                    "coordinate ({}, {}) outside geographic range",
                    c.x, c.y
                )));
            }
        }
        Ok(Self { ring })
    }

    /// Build from a ring already known to be closed and simple, e.g. the
    /// output of an exact coordinate transform of a validated ring.
    pub(crate) fn from_ring_unchecked(ring: Vec<Coord<f64>>) -> Self {
        Self { ring }
    }

    /// The exterior ring, closed (first point repeated at the end).
    pub fn ring(&self) -> &[Coord<f64>] {
        &self.ring
    }

    /// View as a `geo` polygon for planar algorithms.
    pub fn to_geo(&self) -> Polygon<f64> {
        Polygon::new(LineString::new(self.ring.clone()), vec![])
    }

    /// Area-weighted centroid as (longitude, latitude).
    ///
    /// Falls back to the ring centroid for zero-area boundaries.
    pub fn centroid(&self) -> SpatialResult<(f64, f64)> {
        let point: Option<Point<f64>> = self.to_geo().centroid();
        match point {
            Some(p) => Ok((p.x(), p.y())),
            None => Err(SpatialError::InvalidGeometry(
                "boundary has no centroid".to_string(),
            )),
        }
    }
}

/// A boundary ring in a local planar frame (meters), tagged with the
/// projection used to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarPolygon {
    polygon: Polygon<f64>,
    projection: ProjectionId,
}

impl PlanarPolygon {
    pub(crate) fn from_parts(ring: Vec<Coord<f64>>, projection: ProjectionId) -> Self {
        Self {
            polygon: Polygon::new(LineString::new(ring), vec![]),
            projection,
        }
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// The projection this geometry is expressed in.
    pub fn projection(&self) -> ProjectionId {
        self.projection
    }

    /// Planar area in square meters.
    pub fn area_m2(&self) -> f64 {
        self.polygon.unsigned_area()
    }
}

/// Validate ring structure: at least 4 points, closed, simple.
fn validate_ring(ring: &[Coord<f64>]) -> SpatialResult<()> {
    if ring.len() < 4 {
        return Err(SpatialError::InvalidGeometry(format!(
            "ring has {} points, need at least 4 (closed)",
            ring.len()
        )));
    }
    for c in ring {
        if !c.x.is_finite() || !c.y.is_finite() {
            return Err(SpatialError::InvalidGeometry(
                "ring contains non-finite coordinates".to_string(),
            ));
        }
    }
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if first != last {
        return Err(SpatialError::InvalidGeometry(
            "ring is not closed (first and last points differ)".to_string(),
        ));
    }
    if let Some((i, j)) = find_self_intersection(ring) {
        return Err(SpatialError::InvalidGeometry(format!(
            "ring is self-intersecting (segments {} and {} cross)",
            i, j
        )));
    }
    Ok(())
}

/// Find a pair of non-adjacent ring segments that properly cross.
///
/// O(n^2) over segment pairs; boundary rings are small. Segments sharing
/// an endpoint (adjacent, or the closing pair) are skipped.
fn find_self_intersection(ring: &[Coord<f64>]) -> Option<(usize, usize)> {
    let n = ring.len() - 1; // number of segments in the closed ring
    for i in 0..n {
        for j in (i + 2)..n {
            // Segment 0 and segment n-1 share the closure point.
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = (ring[i], ring[i + 1]);
            let (c, d) = (ring[j], ring[j + 1]);
            if segments_cross(a, b, c, d) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Strict (proper) crossing test via orientation signs.
fn segments_cross(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>, d: Coord<f64>) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

fn orientation(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}
