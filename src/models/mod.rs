pub mod geometry;
pub mod grid;
pub mod sun;

pub use geometry::*;
pub use grid::*;
pub use sun::*;
