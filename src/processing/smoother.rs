//! Exponential smoothing of raw GPS fixes

use crate::core::types::Coordinate;
use nalgebra::Vector2;

/// Running exponential moving average over successive fixes
///
/// Each update blends the previous smoothed position 50/50 with the new raw
/// coordinate, regardless of the time elapsed between fixes. That damps
/// single-fix GPS jitter before the drift comparison while still converging
/// on a genuinely moved position within a few updates (the residual halves
/// per fix).
#[derive(Debug, Clone, Default)]
pub struct PositionSmoother {
    smoothed: Option<Vector2<f64>>,
}

impl PositionSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw fix into the running average and return the new estimate
    ///
    /// The first update after construction or `reset` initializes the state
    /// to the raw coordinate unchanged.
    pub fn update(&mut self, raw: &Coordinate) -> Coordinate {
        let raw_v = Vector2::new(raw.latitude, raw.longitude);
        let next = match self.smoothed {
            Some(prev) => (prev + raw_v) * 0.5,
            None => raw_v,
        };
        self.smoothed = Some(next);
        Coordinate {
            latitude: next.x,
            longitude: next.y,
        }
    }

    /// Current smoothed coordinate, if any fix has been folded in
    pub fn current(&self) -> Option<Coordinate> {
        self.smoothed.map(|v| Coordinate {
            latitude: v.x,
            longitude: v.y,
        })
    }

    /// Drop all history. Must be called when a watch (re)starts so a previous
    /// session does not bias the first comparisons.
    pub fn reset(&mut self) {
        self.smoothed = None;
    }
}
