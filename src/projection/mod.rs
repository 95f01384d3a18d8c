//! Local planar projection resolution and coordinate transforms.
//!
//! To measure true ground distances, boundary geometry is reprojected from
//! geographic coordinates (degrees) into a locally accurate planar frame
//! (meters). The globe is divided into sixty 6-degree longitude bands
//! numbered from the antimeridian, split by hemisphere — the standard UTM
//! zone layout. Within a band, a transverse Mercator projection (WGS84
//! ellipsoid, scale 0.9996 at the central meridian) gives sub-meter
//! fidelity for the small boundaries a garden plan deals with.
//!
//! Transforms are exact, order-preserving vertex maps: every ring point
//! goes through the same forward or inverse formula, so ring closure and
//! winding order are preserved bit-for-bit.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::error::{SpatialError, SpatialResult};
use crate::models::{GeoPolygon, PlanarPolygon};

/// WGS84 semi-major axis in meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Central meridian scale factor.
const K0: f64 = 0.9996;
/// False easting applied to every zone.
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Northern latitude limit of the zone layout.
const LAT_MAX: f64 = 84.0;
/// Southern latitude limit of the zone layout.
const LAT_MIN: f64 = -80.0;

/// Identifier of a local planar reference: a 6-degree longitude band
/// (1..=60, numbered east from the antimeridian) plus hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectionId {
    zone: u8,
    north: bool,
}

impl ProjectionId {
    /// Select the planar reference appropriate for measuring ground
    /// distances near the given point.
    ///
    /// Fails with [`SpatialError::ProjectionFailure`] for latitudes
    /// outside the representable range (beyond 84°N / 80°S).
    pub fn for_point(longitude: f64, latitude: f64) -> SpatialResult<Self> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(SpatialError::ProjectionFailure(
                "non-finite coordinates".to_string(),
            ));
        }
        if !(LAT_MIN..=LAT_MAX).contains(&latitude) {
            return Err(SpatialError::ProjectionFailure(format!(
                "latitude {} outside projectable range [{}, {}]",
                latitude, LAT_MIN, LAT_MAX
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SpatialError::ProjectionFailure(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        let zone = (((longitude + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8;
        Ok(Self {
            zone,
            north: latitude >= 0.0,
        })
    }

    /// Band number, 1..=60.
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// True for the northern hemisphere variant of the band.
    pub fn is_north(&self) -> bool {
        self.north
    }

    /// EPSG code of the equivalent UTM CRS (326xx north, 327xx south).
    pub fn epsg(&self) -> u32 {
        if self.north {
            32600 + self.zone as u32
        } else {
            32700 + self.zone as u32
        }
    }

    /// Central meridian of the band in degrees.
    pub fn central_meridian(&self) -> f64 {
        (self.zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

impl std::fmt::Display for ProjectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Project a single geographic point into the planar frame (meters).
pub fn project_point(
    longitude: f64,
    latitude: f64,
    projection: ProjectionId,
) -> SpatialResult<(f64, f64)> {
    if !(LAT_MIN..=LAT_MAX).contains(&latitude) {
        return Err(SpatialError::ProjectionFailure(format!(
            "latitude {} outside projectable range",
            latitude
        )));
    }
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let ep2 = e2 / (1.0 - e2);

    let phi = latitude.to_radians();
    let dlam = (longitude - projection.central_meridian()).to_radians();

    let sin_phi = phi.sin();
    let cos_phi = phi.cos();
    let tan_phi = phi.tan();

    let n = WGS84_A / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let t = tan_phi * tan_phi;
    let c = ep2 * cos_phi * cos_phi;
    let a = dlam * cos_phi;

    let m = meridian_arc(phi, e2);

    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let x = K0
        * n
        * (a + (1.0 - t + c) * a3 / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0)
        + FALSE_EASTING;

    let mut y = K0
        * (m + n
            * tan_phi
            * (a2 / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));
    if !projection.is_north() {
        y += FALSE_NORTHING_SOUTH;
    }

    Ok((x, y))
}

/// Invert a planar point (meters) back to (longitude, latitude) degrees.
pub fn unproject_point(x: f64, y: f64, projection: ProjectionId) -> (f64, f64) {
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let ep2 = e2 / (1.0 - e2);
    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

    let x = x - FALSE_EASTING;
    let y = if projection.is_north() {
        y
    } else {
        y - FALSE_NORTHING_SOUTH
    };

    let m = y / K0;
    let mu = m
        / (WGS84_A
            * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

    let e1_2 = e1 * e1;
    let e1_3 = e1_2 * e1;
    let e1_4 = e1_3 * e1;
    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1_3 / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1_2 / 16.0 - 55.0 * e1_4 / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1_3 / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1_4 / 512.0) * (8.0 * mu).sin();

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let tan_phi1 = phi1.tan();

    let c1 = ep2 * cos_phi1 * cos_phi1;
    let t1 = tan_phi1 * tan_phi1;
    let n1 = WGS84_A / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
    let r1 = WGS84_A * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
    let d = x / (n1 * K0);

    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let phi = phi1
        - (n1 * tan_phi1 / r1)
            * (d2 / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d4 / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                    - 252.0 * ep2
                    - 3.0 * c1 * c1)
                    * d6
                    / 720.0);

    let dlam = (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d5
            / 120.0)
        / cos_phi1;

    let longitude = projection.central_meridian() + dlam.to_degrees();
    let latitude = phi.to_degrees();
    (longitude, latitude)
}

/// Meridian arc length from the equator to latitude `phi`.
fn meridian_arc(phi: f64, e2: f64) -> f64 {
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    WGS84_A
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Reproject a geographic boundary into the given planar frame.
///
/// Order-preserving: vertex `i` of the output is the forward projection of
/// vertex `i` of the input.
pub fn to_planar(boundary: &GeoPolygon, projection: ProjectionId) -> SpatialResult<PlanarPolygon> {
    let mut ring = Vec::with_capacity(boundary.ring().len());
    for c in boundary.ring() {
        let (x, y) = project_point(c.x, c.y, projection)?;
        ring.push(Coord { x, y });
    }
    Ok(PlanarPolygon::from_parts(ring, projection))
}

/// Reproject a planar boundary back to geographic coordinates.
pub fn to_geographic(planar: &PlanarPolygon) -> GeoPolygon {
    let projection = planar.projection();
    let ring = planar
        .polygon()
        .exterior()
        .coords()
        .map(|c| {
            let (lon, lat) = unproject_point(c.x, c.y, projection);
            Coord { x: lon, y: lat }
        })
        .collect();
    GeoPolygon::from_ring_unchecked(ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zone_selection_new_york() {
        let id = ProjectionId::for_point(-74.0060, 40.7128).unwrap();
        assert_eq!(id.zone(), 18);
        assert!(id.is_north());
        assert_eq!(id.epsg(), 32618);
        assert_eq!(id.central_meridian(), -75.0);
    }

    #[test]
    fn test_zone_selection_hobart() {
        let id = ProjectionId::for_point(147.3272, -42.8821).unwrap();
        assert_eq!(id.zone(), 55);
        assert!(!id.is_north());
        assert_eq!(id.epsg(), 32755);
    }

    #[test]
    fn test_zone_selection_antimeridian_edges() {
        let west = ProjectionId::for_point(-180.0, 10.0).unwrap();
        assert_eq!(west.zone(), 1);
        let east = ProjectionId::for_point(180.0, 10.0).unwrap();
        assert_eq!(east.zone(), 60);
    }

    #[test]
    fn test_polar_latitude_rejected() {
        let err = ProjectionId::for_point(0.0, 89.0).unwrap_err();
        assert!(matches!(err, SpatialError::ProjectionFailure(_)));
        let err = ProjectionId::for_point(0.0, -85.0).unwrap_err();
        assert!(matches!(err, SpatialError::ProjectionFailure(_)));
    }

    #[test]
    fn test_central_meridian_maps_to_false_easting() {
        // A point on the central meridian projects to x = 500 km exactly.
        let id = ProjectionId::for_point(-75.0, 40.0).unwrap();
        let (x, _y) = project_point(-75.0, 40.0, id).unwrap();
        assert_relative_eq!(x, 500_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_known_point_zone_31_equator() {
        // Equator on the zone 31 central meridian (3°E): y = 0.
        let id = ProjectionId::for_point(3.0, 0.0).unwrap();
        let (x, y) = project_point(3.0, 0.0, id).unwrap();
        assert_relative_eq!(x, 500_000.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_point_round_trip() {
        let cases = [
            (-74.0060, 40.7128),
            (2.3522, 48.8566),
            (151.2093, -33.8688),
            (0.00005, 0.00005),
        ];
        for (lon, lat) in cases {
            let id = ProjectionId::for_point(lon, lat).unwrap();
            let (x, y) = project_point(lon, lat, id).unwrap();
            let (lon2, lat2) = unproject_point(x, y, id);
            assert_relative_eq!(lon, lon2, epsilon = 1e-7);
            assert_relative_eq!(lat, lat2, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_planar_round_trip() {
        // planar -> geographic -> planar reproduces coordinates within
        // a small floating-point tolerance.
        let id = ProjectionId::for_point(-74.0, 40.7).unwrap();
        let (x, y) = project_point(-74.0, 40.7, id).unwrap();
        let (lon, lat) = unproject_point(x, y, id);
        let (x2, y2) = project_point(lon, lat, id).unwrap();
        assert_relative_eq!(x, x2, epsilon = 1e-4);
        assert_relative_eq!(y, y2, epsilon = 1e-4);
    }

    #[test]
    fn test_southern_hemisphere_false_northing() {
        let id = ProjectionId::for_point(151.0, -33.8).unwrap();
        let (_x, y) = project_point(151.0, -33.8, id).unwrap();
        // Southern points sit below the 10,000 km false northing.
        assert!(y > 0.0 && y < FALSE_NORTHING_SOUTH);
        let (lon, lat) = unproject_point(_x, y, id);
        assert_relative_eq!(lon, 151.0, epsilon = 1e-7);
        assert_relative_eq!(lat, -33.8, epsilon = 1e-7);
    }

    #[test]
    fn test_ring_transform_preserves_order_and_closure() {
        let boundary = GeoPolygon::new(vec![
            (-74.001, 40.701),
            (-74.001, 40.702),
            (-74.000, 40.702),
            (-74.000, 40.701),
            (-74.001, 40.701),
        ])
        .unwrap();
        let id = ProjectionId::for_point(-74.0005, 40.7015).unwrap();
        let planar = to_planar(&boundary, id).unwrap();
        let exterior = planar.polygon().exterior();
        assert_eq!(exterior.0.len(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);

        let back = to_geographic(&planar);
        assert_eq!(back.ring().len(), 5);
        for (a, b) in boundary.ring().iter().zip(back.ring()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-7);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_display_is_epsg_code() {
        let id = ProjectionId::for_point(-74.0, 40.7).unwrap();
        assert_eq!(id.to_string(), "EPSG:32618");
    }
}
