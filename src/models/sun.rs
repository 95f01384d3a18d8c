//! Sun exposure result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Solar position observed for one hour of the sampling window.
///
/// Altitude is degrees above the horizon (negative means the sun is below
/// it); azimuth is degrees clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunSample {
    pub hour: u32,
    pub altitude: f64,
    pub azimuth: f64,
}

impl SunSample {
    /// Whether the sun is strictly above the horizon for this sample.
    pub fn is_daylight(&self) -> bool {
        self.altitude > 0.0
    }
}

/// One day of hourly sun positions plus the derived effective-sunlight
/// hour count for a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct SunExposureResult {
    pub date: NaiveDate,
    /// Ordered samples, one per hour of the observation window.
    pub samples: Vec<SunSample>,
    /// Count of unobstructed samples with the sun above the horizon.
    pub effective_sun_hours: u32,
}
