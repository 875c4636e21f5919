//! Drift detection state machine
//!
//! A single out-of-radius fix must not wake the crew: GPS delivers transient
//! jumps well beyond any sane watch radius. The detector keeps a bounded
//! up/down counter over smoothed fixes instead — an asymmetric leaky bucket.
//! Only `margin` net exceedances raise the alarm, and any in-radius fix
//! decays the counter.

use crate::api::types::{AlarmTransition, WatchStatus};
use crate::core::types::{AnchorTarget, PositionReading};
use crate::geodesy::distance_meters;
use crate::processing::smoother::PositionSmoother;
use tracing::{debug, info};

/// Counter-based hysteresis detector over a stream of GPS fixes
///
/// Owned by one `WatchController`; not safe for concurrent invocation.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    margin: u32,
    radius_m: f64,
    target: Option<AnchorTarget>,
    counter: u32,
    status: WatchStatus,
    smoother: PositionSmoother,
    last_distance_m: Option<f64>,
}

impl DriftDetector {
    /// Create a detector that alarms after `margin` net out-of-radius counts
    pub fn new(margin: u32) -> Self {
        Self {
            margin,
            radius_m: 0.0,
            target: None,
            counter: 0,
            status: WatchStatus::Idle,
            smoother: PositionSmoother::new(),
            last_distance_m: None,
        }
    }

    /// Arm the watch around `target` with the given radius
    ///
    /// Resets the counter and the smoother; stale history from a previous
    /// session must not bias the first comparisons.
    pub fn start(&mut self, radius_m: f64, target: AnchorTarget) {
        self.radius_m = radius_m;
        self.target = Some(target);
        self.counter = 0;
        self.status = WatchStatus::Armed;
        self.smoother.reset();
        self.last_distance_m = None;
        info!(radius_m, "anchor watch armed");
    }

    /// Fold one fix into the watch and report the alarm transition, if any
    ///
    /// A no-op while idle or without a target; the contract is permissive
    /// rather than panicking on out-of-order lifecycle calls.
    pub fn update(&mut self, reading: &PositionReading) -> AlarmTransition {
        if self.status == WatchStatus::Idle {
            return AlarmTransition::None;
        }
        let Some(target) = self.target else {
            return AlarmTransition::None;
        };

        let smoothed = self.smoother.update(&reading.coord);
        let d = distance_meters(&smoothed, &target.coord);
        self.last_distance_m = Some(d);

        if d > self.radius_m {
            self.counter += 1;
        } else {
            self.counter = self.counter.saturating_sub(1);
        }
        debug!(
            distance_m = d,
            counter = self.counter,
            "drift update"
        );

        let was = self.status;
        if self.counter >= self.margin {
            self.status = WatchStatus::Alarming;
            if was != WatchStatus::Alarming {
                info!(distance_m = d, counter = self.counter, "anchor dragging");
                return AlarmTransition::Raise;
            }
        } else {
            self.status = WatchStatus::Armed;
            if was == WatchStatus::Alarming {
                info!(distance_m = d, counter = self.counter, "drift back within radius");
                return AlarmTransition::Clear;
            }
        }
        AlarmTransition::None
    }

    /// Disarm from any state
    ///
    /// Returns `Clear` when an alarm was active so the caller can silence its
    /// sink. Safe to call repeatedly.
    pub fn stop(&mut self) -> AlarmTransition {
        let was_alarming = self.status == WatchStatus::Alarming;
        self.status = WatchStatus::Idle;
        self.counter = 0;
        self.target = None;
        self.smoother.reset();
        self.last_distance_m = None;
        if was_alarming {
            AlarmTransition::Clear
        } else {
            AlarmTransition::None
        }
    }

    /// Change the radius of a running watch
    ///
    /// Takes effect on the next update without resetting the counter: a reset
    /// here would mask a drag in progress right after the change, at the cost
    /// of one comparison against the old radius already counted.
    pub fn set_radius(&mut self, radius_m: f64) {
        self.radius_m = radius_m;
    }

    pub fn status(&self) -> WatchStatus {
        self.status
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn target(&self) -> Option<&AnchorTarget> {
        self.target.as_ref()
    }

    /// Smoothed distance to the anchor from the most recent update (meters)
    pub fn last_distance_m(&self) -> Option<f64> {
        self.last_distance_m
    }
}
