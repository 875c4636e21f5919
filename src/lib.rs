//! Anchor Watch Core
//!
//! Tracks a vessel's GPS position relative to a user-set anchor point and
//! raises an alarm when the boat drifts beyond a configured radius, with
//! smoothing and counter-based hysteresis to keep GPS noise from waking the
//! crew. UI, platform permissions and audio stay behind the
//! `PositionSource`/`AlarmSink` boundaries.

pub mod api;
pub mod core;
pub mod geodesy;
pub mod processing;
pub mod source;
pub mod utils;
pub mod watch;

// Re-export commonly used types
pub use api::{
    format_accuracy, format_distance_with_error, format_heading, format_latitude_dms,
    format_longitude_dms, to_degrees_minutes_seconds, AlarmTransition, JsonFormatter,
    TextFormatter, WatchError, WatchResult, WatchSnapshot, WatchStatus,
};
pub use crate::core::{AnchorTarget, Coordinate, PositionReading};
pub use geodesy::{destination, distance_meters};
pub use processing::{combine_independent_errors, AccuracyModel, PositionSmoother};
pub use source::{MockPositionSource, PermissionState, PositionSource};
pub use utils::WatchConfig;
pub use watch::{AlarmSink, CountingAlarm, DriftDetector, WatchController};
