//! Solar position capability.
//!
//! The exposure estimator treats sun position as an injected collaborator:
//! anything that can answer "where is the sun for this coordinate and
//! instant" can drive it. [`EquationOfTimeModel`] is the built-in
//! implementation, a classic declination / equation-of-time / hour-angle
//! model accurate to about a degree — plenty for counting daylight hours.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::SolarLookupError;

/// Mean obliquity of the ecliptic used by the declination approximation.
const EARTH_AXIAL_TILT_DEG: f64 = 23.45;
/// The Earth rotates 15 degrees of hour angle per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// The injected Solar Position capability.
///
/// Implementations are treated as pure functions of (latitude, longitude,
/// instant); the engine does not know or care about the internal
/// algorithm. Returns (altitude, azimuth) in degrees.
pub trait SolarPositionProvider {
    fn altitude_azimuth(
        &self,
        latitude: f64,
        longitude: f64,
        time: DateTime<Utc>,
    ) -> Result<(f64, f64), SolarLookupError>;
}

/// Built-in solar position model based on the solar declination and the
/// equation of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquationOfTimeModel;

impl SolarPositionProvider for EquationOfTimeModel {
    fn altitude_azimuth(
        &self,
        latitude: f64,
        longitude: f64,
        time: DateTime<Utc>,
    ) -> Result<(f64, f64), SolarLookupError> {
        if !(-90.0..=90.0).contains(&latitude) || !longitude.is_finite() {
            return Err(SolarLookupError(format!(
                "coordinates ({}, {}) out of range",
                latitude, longitude
            )));
        }
        let n = time.ordinal() as i32;
        let utc_hours =
            time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;

        let eot_minutes = equation_of_time(n);
        let declination = solar_declination(n);
        // Local solar time from UTC: 4 minutes per degree of longitude
        // plus the equation-of-time correction.
        let correction_hours = (4.0 * longitude + eot_minutes) / 60.0;
        let local_solar_time = (utc_hours + correction_hours).rem_euclid(24.0);
        let hour_angle = DEGREES_PER_HOUR * (local_solar_time - 12.0);

        let zenith = solar_zenith(latitude, declination, hour_angle);
        let altitude = 90.0 - zenith;
        let azimuth = solar_azimuth(latitude, declination, hour_angle);
        Ok((altitude, azimuth))
    }
}

/// Equation of time in minutes for day-of-year `n` (Spencer's harmonic
/// fit).
fn equation_of_time(n: i32) -> f64 {
    let b = ((n - 1) as f64 * (360.0 / 365.0)).to_radians();
    229.18
        * (0.000075 + 0.001868 * b.cos() - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Solar declination in degrees for day-of-year `n`.
fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT_DEG * (360.0 * ((284 + n) as f64 / 365.0)).to_radians().sin()
}

/// Solar zenith angle in degrees.
fn solar_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let ha = hour_angle.to_radians();
    let cos_zenith = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();
    cos_zenith.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Solar azimuth in degrees clockwise from north, normalized to [0, 360).
fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let ha = hour_angle.to_radians();
    let sin_az = -dec.cos() * ha.sin();
    let cos_az = dec.sin() * lat.cos() - dec.cos() * lat.sin() * ha.cos();
    sin_az.atan2(cos_az).to_degrees().rem_euclid(360.0)
}
