//! Core data types for the anchor watch

use crate::api::types::{WatchError, WatchResult};
use serde::{Deserialize, Serialize};

/// Geodetic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating the degree ranges
    pub fn new(latitude: f64, longitude: f64) -> WatchResult<Self> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(WatchError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// One GPS fix as delivered by the position source
///
/// `accuracy_m` is the reported 1-sigma horizontal error radius, `None` when
/// the platform does not report one. Readings supersede each other; they are
/// never merged except inside the smoother.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionReading {
    pub coord: Coordinate,
    pub timestamp_ms: u64,
    pub accuracy_m: Option<f64>,
}

impl PositionReading {
    pub fn new(coord: Coordinate, timestamp_ms: u64, accuracy_m: Option<f64>) -> Self {
        Self {
            coord,
            timestamp_ms,
            accuracy_m,
        }
    }
}

/// The dropped anchor position the vessel is expected to stay near
///
/// Set by explicit user action, either captured from a current reading or
/// projected from it by bearing and distance. Cleared by the retrieve action.
/// Lives independently of whether a watch is running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorTarget {
    pub coord: Coordinate,
    pub accuracy_m: Option<f64>,
}

impl AnchorTarget {
    /// Drop the anchor at the position of a GPS fix
    pub fn from_reading(reading: &PositionReading) -> Self {
        Self {
            coord: reading.coord,
            accuracy_m: reading.accuracy_m,
        }
    }

    /// Drop the anchor offset from a fix by compass bearing and distance
    ///
    /// Used when the anchor was let go some way from where the phone is,
    /// e.g. from the bow while the fix is taken at the helm.
    pub fn from_reading_offset(
        reading: &PositionReading,
        bearing_deg: f64,
        distance_m: f64,
    ) -> Self {
        let coord = crate::geodesy::destination(bearing_deg, distance_m / 1000.0, &reading.coord);
        Self {
            coord,
            accuracy_m: reading.accuracy_m,
        }
    }
}
