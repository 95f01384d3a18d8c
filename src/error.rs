//! Error types for the spatial engine.
//!
//! Geometry and parameter validation happens once at the start of each
//! public operation and fails fast. Per-sample failures inside a sampling
//! loop (solar position lookups) are isolated by the caller and never
//! abort an aggregate result.

use thiserror::Error;

/// Result type for spatial engine operations.
pub type SpatialResult<T> = Result<T, SpatialError>;

/// Top-level error type for grid and sun-exposure computations.
#[derive(Debug, Clone, Error)]
pub enum SpatialError {
    /// Malformed, unclosed, self-intersecting, or empty boundary ring.
    /// Surfaced to the caller as a client-input error; never repaired.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A caller-supplied parameter is out of range (e.g. non-positive
    /// cell size).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Coordinates outside the representable planar range (e.g. polar
    /// latitudes). Surfaced, not recovered.
    #[error("projection failure: {0}")]
    ProjectionFailure(String),

    /// A solar position lookup failed. When this occurs for a single
    /// hour inside an exposure computation it is recovered locally (that
    /// hour contributes no sunlight); it only surfaces from direct use
    /// of the solar capability.
    #[error(transparent)]
    SolarLookup(#[from] SolarLookupError),
}

/// Failure reported by a [`SolarPositionProvider`] implementation.
///
/// [`SolarPositionProvider`]: crate::services::solar::SolarPositionProvider
#[derive(Debug, Clone, Error)]
#[error("solar lookup failed: {0}")]
pub struct SolarLookupError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpatialError::InvalidGeometry("ring is not closed".to_string());
        assert_eq!(err.to_string(), "invalid geometry: ring is not closed");

        let err = SpatialError::InvalidParameter("cell size must be positive".to_string());
        assert!(err.to_string().starts_with("invalid parameter"));
    }

    #[test]
    fn test_solar_lookup_error_converts() {
        let lookup = SolarLookupError("ephemeris unavailable".to_string());
        let err: SpatialError = lookup.into();
        assert!(matches!(err, SpatialError::SolarLookup(_)));
        assert_eq!(err.to_string(), "solar lookup failed: ephemeris unavailable");
    }
}
