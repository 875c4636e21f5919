//! Watch configuration

use crate::api::types::{WatchError, WatchResult};
use crate::core::constants::{ACCURACY_THRESHOLD_M, DEFAULT_RADIUS_M, DEFAULT_WATCH_MARGIN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable parameters of a watch session
///
/// The margin is deliberately a parameter, not a constant: small values react
/// fast but tolerate little noise, larger values (10 and up) suit anchorages
/// with poor reception at the cost of later alarms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Net out-of-radius counts required before the alarm is raised
    pub margin: u32,
    /// Single-fix accuracy above which a poor-GPS warning is logged (meters)
    pub accuracy_threshold_m: f64,
    /// Watch radius used until the caller picks one (meters)
    pub default_radius_m: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_WATCH_MARGIN,
            accuracy_threshold_m: ACCURACY_THRESHOLD_M,
            default_radius_m: DEFAULT_RADIUS_M,
        }
    }
}

impl WatchConfig {
    /// Parse a configuration from a JSON string and validate it
    pub fn from_json_str(json: &str) -> WatchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> WatchResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check all parameters are inside their valid ranges
    pub fn validate(&self) -> WatchResult<()> {
        if self.margin == 0 {
            return Err(WatchError::ConfigurationError {
                parameter: "margin".to_string(),
                value: self.margin.to_string(),
            });
        }
        if !self.accuracy_threshold_m.is_finite() || self.accuracy_threshold_m <= 0.0 {
            return Err(WatchError::ConfigurationError {
                parameter: "accuracy_threshold_m".to_string(),
                value: self.accuracy_threshold_m.to_string(),
            });
        }
        if !self.default_radius_m.is_finite() || self.default_radius_m <= 0.0 {
            return Err(WatchError::ConfigurationError {
                parameter: "default_radius_m".to_string(),
                value: self.default_radius_m.to_string(),
            });
        }
        Ok(())
    }
}
