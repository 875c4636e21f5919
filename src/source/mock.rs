//! Mock position source for testing and development

use crate::api::types::{WatchError, WatchResult};
use crate::core::types::{Coordinate, PositionReading};
use crate::source::{PermissionState, PositionSource};
use std::collections::VecDeque;

/// Scripted position source for tests and the demo binary
///
/// Readings are queued up front and drained by the host loop, which forwards
/// them to the controller. Start/stop calls are counted so tests can assert
/// the single-subscription guarantee.
#[derive(Debug)]
pub struct MockPositionSource {
    permission: PermissionState,
    queue: VecDeque<PositionReading>,
    fail_on_start: bool,
    fail_on_stop: bool,
    active: bool,
    start_calls: u32,
    stop_calls: u32,
}

impl MockPositionSource {
    pub fn new() -> Self {
        Self {
            permission: PermissionState::Granted,
            queue: VecDeque::new(),
            fail_on_start: false,
            fail_on_stop: false,
            active: false,
            start_calls: 0,
            stop_calls: 0,
        }
    }

    /// Create a source whose permission was denied
    pub fn denied() -> Self {
        Self {
            permission: PermissionState::Denied,
            ..Self::new()
        }
    }

    /// Queue one fix
    pub fn push_reading(&mut self, reading: PositionReading) {
        self.queue.push_back(reading);
    }

    /// Queue a fix from raw parts
    pub fn push_fix(&mut self, latitude: f64, longitude: f64, timestamp_ms: u64, accuracy_m: Option<f64>) {
        self.queue.push_back(PositionReading::new(
            Coordinate {
                latitude,
                longitude,
            },
            timestamp_ms,
            accuracy_m,
        ));
    }

    /// Pop the next scripted fix, if the source was started
    pub fn next_reading(&mut self) -> Option<PositionReading> {
        if !self.active {
            return None;
        }
        self.queue.pop_front()
    }

    /// Make `start_updates` fail, simulating a platform API error
    pub fn fail_on_start(&mut self, fail: bool) {
        self.fail_on_start = fail;
    }

    /// Make `stop_updates` fail
    pub fn fail_on_stop(&mut self, fail: bool) {
        self.fail_on_stop = fail;
    }

    pub fn set_permission(&mut self, permission: PermissionState) {
        self.permission = permission;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_calls(&self) -> u32 {
        self.start_calls
    }

    pub fn stop_calls(&self) -> u32 {
        self.stop_calls
    }
}

impl Default for MockPositionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSource for MockPositionSource {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn start_updates(&mut self) -> WatchResult<()> {
        self.start_calls += 1;
        if self.fail_on_start {
            return Err(WatchError::ProviderFailure {
                message: "mock start failure".to_string(),
            });
        }
        self.active = true;
        Ok(())
    }

    fn stop_updates(&mut self) -> WatchResult<()> {
        self.stop_calls += 1;
        self.active = false;
        if self.fail_on_stop {
            return Err(WatchError::ProviderFailure {
                message: "mock stop failure".to_string(),
            });
        }
        Ok(())
    }
}
