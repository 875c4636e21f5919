//! Common API types and the watch error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for watch operations
pub type WatchResult<T> = Result<T, WatchError>;

/// Watch error types
///
/// Invalid-state operations (updating an idle detector, starting a watch with
/// no anchor set, stopping twice) are deliberately not errors; those calls are
/// absorbed as no-ops. Errors here are the conditions an upstream UI has to
/// surface to the user.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Location permission was not granted; no updates will arrive
    #[error("location permission denied: {message}")]
    PermissionDenied { message: String },
    /// The platform location provider failed to start or stop
    #[error("location provider failure: {message}")]
    ProviderFailure { message: String },
    /// Latitude or longitude outside the valid degree ranges
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// A configuration parameter is out of range
    #[error("invalid configuration: {parameter} = {value}")]
    ConfigurationError { parameter: String, value: String },
    /// Configuration file could not be read
    #[error("config file error")]
    Io(#[from] std::io::Error),
    /// Configuration file could not be parsed
    #[error("config parse error")]
    Parse(#[from] serde_json::Error),
}

/// Watch lifecycle state
///
/// `Alarming` implies an active watch; there is no alarming-while-idle state
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchStatus {
    /// No watch running
    Idle,
    /// Watching, drift counter below the margin
    Armed,
    /// Drift counter reached the margin, alarm raised
    Alarming,
}

impl WatchStatus {
    pub fn is_watching(&self) -> bool {
        matches!(self, WatchStatus::Armed | WatchStatus::Alarming)
    }
}

/// Detector verdict for a single update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmTransition {
    /// No change in alarm state
    None,
    /// Counter reached the margin; sound the alarm (sent once, not repeated
    /// while the alarm stays on)
    Raise,
    /// Counter dropped back below the margin; silence the alarm
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_watching_predicate() {
        assert!(!WatchStatus::Idle.is_watching());
        assert!(WatchStatus::Armed.is_watching());
        assert!(WatchStatus::Alarming.is_watching());
    }

    #[test]
    fn test_error_messages() {
        let err = WatchError::PermissionDenied {
            message: "denied by user".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "location permission denied: denied by user"
        );

        let err = WatchError::ConfigurationError {
            parameter: "margin".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: margin = 0");
    }
}
