//! Public API surface for the spatial engine.
//!
//! This file consolidates the DTO types the HTTP layer serializes for the
//! front end. Field names and units are a compatibility contract: grid
//! responses expose `grid_cells`, `cell_size_feet`, `total_cells` and
//! `dimensions.{width_feet,height_feet}`; sun exposure responses expose
//! `date`, `total_sun_hours` and `hourly_data`.

pub use crate::error::{SolarLookupError, SpatialError, SpatialResult};
pub use crate::models::{
    GeoPolygon, GridCell, GridResult, PlanarPolygon, SunExposureResult, SunSample,
};
pub use crate::projection::ProjectionId;
pub use crate::services::{
    cell_at_coordinates, compute_sun_exposure, create_grid, exposure_for, EquationOfTimeModel,
    NoObstruction, ObstructionModel, SolarPositionProvider,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// GeoJSON-style polygon geometry with a single outer ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// One ring of [longitude, latitude] positions, closed.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl From<&GeoPolygon> for PolygonGeometry {
    fn from(polygon: &GeoPolygon) -> Self {
        Self {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![polygon.ring().iter().map(|c| [c.x, c.y]).collect()],
        }
    }
}

/// Bounding-box dimensions of a grid, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width_feet: f64,
    pub height_feet: f64,
}

/// Serialized form of a [`GridResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResponse {
    pub grid_cells: Vec<PolygonGeometry>,
    pub cell_size_feet: f64,
    pub total_cells: usize,
    pub dimensions: GridDimensions,
}

impl From<&GridResult> for GridResponse {
    fn from(result: &GridResult) -> Self {
        Self {
            grid_cells: result
                .cells
                .iter()
                .map(|cell| PolygonGeometry::from(&cell.geographic))
                .collect(),
            cell_size_feet: result.cell_size_feet,
            total_cells: result.total_cells,
            dimensions: GridDimensions {
                width_feet: result.width_feet,
                height_feet: result.height_feet,
            },
        }
    }
}

/// One entry of the hourly sun position series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySunPosition {
    pub hour: u32,
    pub altitude: f64,
    pub azimuth: f64,
}

/// Serialized form of a [`SunExposureResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunExposureResponse {
    pub date: NaiveDate,
    pub total_sun_hours: u32,
    pub hourly_data: Vec<HourlySunPosition>,
}

impl From<&SunExposureResult> for SunExposureResponse {
    fn from(result: &SunExposureResult) -> Self {
        Self {
            date: result.date,
            total_sun_hours: result.effective_sun_hours,
            hourly_data: result
                .samples
                .iter()
                .map(|s| HourlySunPosition {
                    hour: s.hour,
                    altitude: s.altitude,
                    azimuth: s.azimuth,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_geometry_shape() {
        let poly = GeoPolygon::new(vec![
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 0.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let geometry = PolygonGeometry::from(&poly);
        assert_eq!(geometry.geometry_type, "Polygon");
        assert_eq!(geometry.coordinates.len(), 1);
        assert_eq!(geometry.coordinates[0].len(), 5);
        assert_eq!(geometry.coordinates[0][0], [0.0, 0.0]);
    }

    #[test]
    fn test_grid_response_field_names() {
        let boundary = GeoPolygon::new(vec![
            (0.0, 0.0),
            (0.0, 0.0001),
            (0.0001, 0.0001),
            (0.0001, 0.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let result = create_grid(&boundary, 10.0).unwrap();
        let response = GridResponse::from(&result);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("grid_cells").is_some());
        assert_eq!(json["cell_size_feet"], 10.0);
        assert!(json["total_cells"].as_u64().unwrap() > 0);
        assert!(json["dimensions"]["width_feet"].as_f64().unwrap() > 0.0);
        assert!(json["dimensions"]["height_feet"].as_f64().unwrap() > 0.0);
        assert_eq!(json["grid_cells"][0]["type"], "Polygon");
    }

    #[test]
    fn test_sun_exposure_response_field_names() {
        let boundary = GeoPolygon::new(vec![
            (-74.0061, 40.7127),
            (-74.0061, 40.7129),
            (-74.0059, 40.7129),
            (-74.0059, 40.7127),
            (-74.0061, 40.7127),
        ])
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
        let result = exposure_for(&boundary, date).unwrap();
        let response = SunExposureResponse::from(&result);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["date"], "2026-06-21");
        assert!(json.get("total_sun_hours").is_some());
        assert_eq!(json["hourly_data"].as_array().unwrap().len(), 14);
        let first = &json["hourly_data"][0];
        assert_eq!(first["hour"], 6);
        assert!(first.get("altitude").is_some());
        assert!(first.get("azimuth").is_some());
    }
}
