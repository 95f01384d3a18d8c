//! Service layer: the grid partitioner, the sun exposure estimator, and
//! the solar position capability they share.

pub mod grid;
pub mod solar;
pub mod sun_exposure;

pub use grid::{cell_at_coordinates, create_grid, METERS_PER_FOOT};
pub use solar::{EquationOfTimeModel, SolarPositionProvider};
pub use sun_exposure::{
    compute_sun_exposure, exposure_for, NoObstruction, ObstructionModel,
    OBSERVATION_END_HOUR, OBSERVATION_START_HOUR,
};
