//! Sunlight exposure estimation for a zone.
//!
//! Samples the sun's position across a fixed daylight observation window
//! (06:00 through 19:00 local mean solar time, 14 samples) at the zone's
//! centroid and reduces the samples to an effective-sunlight-hours figure.
//! The centroid stands in for the whole zone; per-point variation within
//! the zone is not modeled.
//!
//! A single hour's solar lookup failure degrades that hour to a
//! zero-contribution sample rather than aborting the computation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use log::warn;

use crate::error::SpatialResult;
use crate::models::{GeoPolygon, SunExposureResult, SunSample};
use crate::services::solar::{EquationOfTimeModel, SolarPositionProvider};

/// First sampled hour of the observation window.
pub const OBSERVATION_START_HOUR: u32 = 6;
/// Last sampled hour of the observation window (inclusive).
pub const OBSERVATION_END_HOUR: u32 = 19;

/// Occlusion extension seam: obstacles (structures, trees) that can veto
/// a daylight sample before it is counted.
pub trait ObstructionModel {
    /// Whether the sun at `sample` is blocked for the given zone.
    fn blocks(&self, sample: &SunSample, boundary: &GeoPolygon) -> bool;
}

/// Default obstruction model: nothing ever blocks the sun.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstruction;

impl ObstructionModel for NoObstruction {
    fn blocks(&self, _sample: &SunSample, _boundary: &GeoPolygon) -> bool {
        false
    }
}

/// Compute sun exposure for a zone on the given date using the built-in
/// solar model and no obstructions.
pub fn exposure_for(boundary: &GeoPolygon, date: NaiveDate) -> SpatialResult<SunExposureResult> {
    compute_sun_exposure(boundary, date, &EquationOfTimeModel, &NoObstruction)
}

/// Compute sun exposure for a zone with explicit collaborators.
///
/// For each hour of the observation window, the sampled instant is hour
/// `h` local mean solar time at the centroid, converted to UTC via the
/// longitude offset (15 degrees per hour). Effective sunlight hours is
/// the count of unblocked samples with altitude strictly above zero.
pub fn compute_sun_exposure(
    boundary: &GeoPolygon,
    date: NaiveDate,
    provider: &dyn SolarPositionProvider,
    obstruction: &dyn ObstructionModel,
) -> SpatialResult<SunExposureResult> {
    let (longitude, latitude) = boundary.centroid()?;
    let midnight: DateTime<Utc> = date.and_time(NaiveTime::MIN).and_utc();

    let mut samples = Vec::with_capacity(
        (OBSERVATION_END_HOUR - OBSERVATION_START_HOUR + 1) as usize,
    );
    for hour in OBSERVATION_START_HOUR..=OBSERVATION_END_HOUR {
        let utc_offset_secs = ((hour as f64 - longitude / 15.0) * 3600.0).round() as i64;
        let instant = midnight + Duration::seconds(utc_offset_secs);
        let sample = match provider.altitude_azimuth(latitude, longitude, instant) {
            Ok((altitude, azimuth)) => SunSample {
                hour,
                altitude,
                azimuth,
            },
            Err(err) => {
                // Best-effort degradation: the hour contributes no
                // sunlight instead of failing the whole day.
                warn!("solar lookup failed for hour {}: {}", hour, err);
                SunSample {
                    hour,
                    altitude: 0.0,
                    azimuth: 0.0,
                }
            }
        };
        samples.push(sample);
    }

    let effective_sun_hours = samples
        .iter()
        .filter(|s| s.is_daylight() && !obstruction.blocks(s, boundary))
        .count() as u32;

    Ok(SunExposureResult {
        date,
        samples,
        effective_sun_hours,
    })
}
