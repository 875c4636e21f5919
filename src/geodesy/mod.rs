//! Spherical geodesy: distances and projections on the mean-radius Earth

pub mod distance;
pub mod projection;

pub use distance::distance_meters;
pub use projection::destination;
