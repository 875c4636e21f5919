//! Watch lifecycle orchestration

use crate::api::formatting::WatchSnapshot;
use crate::api::types::{AlarmTransition, WatchError, WatchResult, WatchStatus};
use crate::core::types::{AnchorTarget, PositionReading};
use crate::processing::error_model::{combine_independent_errors, AccuracyModel};
use crate::source::PositionSource;
use crate::utils::config::WatchConfig;
use crate::watch::alarm::AlarmSink;
use crate::watch::detector::DriftDetector;
use tracing::{info, warn};

/// Owns one watch session: the detector, the upstream subscription and the
/// alarm sink
///
/// One controller per active watch, invoked from one callback context at a
/// time. The controller guarantees at most one active upstream subscription:
/// starting while already watching is a no-op, so the drift counter can never
/// be double-fed by duplicate subscriptions.
pub struct WatchController<S: PositionSource, A: AlarmSink> {
    source: S,
    alarm: A,
    detector: DriftDetector,
    accuracy: AccuracyModel,
    target: Option<AnchorTarget>,
    radius_m: f64,
    last_reading: Option<PositionReading>,
    subscribed: bool,
}

impl<S: PositionSource, A: AlarmSink> WatchController<S, A> {
    /// Create a controller over a position source and an alarm sink
    pub fn new(source: S, alarm: A, config: WatchConfig) -> WatchResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            alarm,
            detector: DriftDetector::new(config.margin),
            accuracy: AccuracyModel::new(config.accuracy_threshold_m),
            target: None,
            radius_m: config.default_radius_m,
            last_reading: None,
            subscribed: false,
        })
    }

    /// Drop the anchor
    ///
    /// A running watch keeps the target it was armed with; the new target is
    /// used by the next `start_watch`.
    pub fn set_target(&mut self, target: AnchorTarget) {
        self.target = Some(target);
    }

    /// Retrieve the anchor. Forces a stop when a watch is running; watching a
    /// retrieved anchor makes no sense.
    pub fn retrieve_target(&mut self) -> WatchResult<()> {
        self.target = None;
        if self.subscribed {
            self.stop_watch()?;
        }
        Ok(())
    }

    /// Change the watch radius
    ///
    /// Permitted while armed; takes effect on the next fix without resetting
    /// the drift counter.
    pub fn set_radius(&mut self, radius_m: f64) -> WatchResult<()> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(WatchError::ConfigurationError {
                parameter: "radius_m".to_string(),
                value: radius_m.to_string(),
            });
        }
        self.radius_m = radius_m;
        self.detector.set_radius(radius_m);
        Ok(())
    }

    /// Start watching the current target
    ///
    /// Returns `Ok(false)` without side effects when no target is set or a
    /// watch is already running. Fails typed when permission is missing or
    /// the provider refuses to start.
    pub fn start_watch(&mut self) -> WatchResult<bool> {
        if self.subscribed {
            return Ok(false);
        }
        let Some(target) = self.target else {
            return Ok(false);
        };
        if !self.source.permission().is_granted() {
            return Err(WatchError::PermissionDenied {
                message: "permission to get current location was denied".to_string(),
            });
        }
        self.source.start_updates()?;
        self.detector.start(self.radius_m, target);
        self.last_reading = None;
        self.subscribed = true;
        Ok(true)
    }

    /// Stop watching
    ///
    /// Unsubscribes synchronously (no fix is processed after this returns),
    /// resets the detector to idle and silences an active alarm. Idempotent:
    /// stopping an idle controller is a no-op.
    pub fn stop_watch(&mut self) -> WatchResult<()> {
        if !self.subscribed {
            return Ok(());
        }
        self.subscribed = false;
        let source_result = self.source.stop_updates();
        if self.detector.stop() == AlarmTransition::Clear {
            self.alarm.stop_alarm();
        }
        info!("anchor watch stopped");
        source_result
    }

    /// Feed one fix from the position source
    ///
    /// Invoked by the host's location callback. Fixes arriving after a stop
    /// are discarded. A fix pair with poor combined accuracy is logged as a
    /// warning but still processed; missing a real drag is worse than a
    /// jittery counter.
    pub fn on_position(&mut self, reading: &PositionReading) {
        if !self.subscribed {
            return;
        }
        let anchor_accuracy = self.detector.target().and_then(|t| t.accuracy_m);
        if self.accuracy.is_poor(reading.accuracy_m, anchor_accuracy) {
            warn!(
                accuracy_m = ?reading.accuracy_m,
                threshold_m = self.accuracy.threshold_m(),
                "poor GPS accuracy"
            );
        }
        self.last_reading = Some(*reading);
        match self.detector.update(reading) {
            AlarmTransition::Raise => self.alarm.start_alarm(),
            AlarmTransition::Clear => self.alarm.stop_alarm(),
            AlarmTransition::None => {}
        }
    }

    pub fn status(&self) -> WatchStatus {
        self.detector.status()
    }

    /// Net out-of-radius count, for progress display
    pub fn counter(&self) -> u32 {
        self.detector.counter()
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn target(&self) -> Option<&AnchorTarget> {
        self.target.as_ref()
    }

    /// Point-in-time view of the session for display or logging
    pub fn snapshot(&self) -> WatchSnapshot {
        let anchor_accuracy = self.detector.target().and_then(|t| t.accuracy_m);
        let reading_accuracy = self.last_reading.and_then(|r| r.accuracy_m);
        WatchSnapshot {
            status: self.detector.status(),
            counter: self.detector.counter(),
            margin: self.detector.margin(),
            radius_m: self.detector.radius_m(),
            distance_m: self.detector.last_distance_m(),
            accuracy_m: combine_independent_errors(reading_accuracy, anchor_accuracy),
            timestamp_ms: self.last_reading.map(|r| r.timestamp_ms),
        }
    }

    /// Access the underlying source, e.g. for a host pump loop
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn alarm(&self) -> &A {
        &self.alarm
    }
}
