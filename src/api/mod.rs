//! Public surface shared with the UI collaborator: errors, status types and
//! display formatting

pub mod formatting;
pub mod types;

pub use formatting::{
    format_accuracy, format_distance_with_error, format_heading, format_latitude_dms,
    format_longitude_dms, to_degrees_minutes_seconds, JsonFormatter, TextFormatter, WatchSnapshot,
};
pub use types::{AlarmTransition, WatchError, WatchResult, WatchStatus};
