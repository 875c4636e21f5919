//! Per-fix signal conditioning between the raw GPS feed and the detector

pub mod error_model;
pub mod smoother;

pub use error_model::{combine_independent_errors, AccuracyModel};
pub use smoother::PositionSmoother;
