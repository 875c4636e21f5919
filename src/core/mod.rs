pub mod constants;
pub mod types;

pub use constants::{
    ACCURACY_THRESHOLD_M, DEFAULT_RADIUS_M, DEFAULT_WATCH_MARGIN, EARTH_RADIUS_KM, EARTH_RADIUS_M,
};
pub use types::{AnchorTarget, Coordinate, PositionReading};
