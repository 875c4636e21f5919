//! Position source boundary
//!
//! The core never talks to a platform location API directly. A host supplies
//! something implementing [`PositionSource`]; the controller starts and stops
//! it and receives fixes through its own `on_position` entry point, from one
//! callback context at a time.

pub mod mock;

use crate::api::types::WatchResult;

pub use mock::MockPositionSource;

/// Authorization state of the platform location permission
///
/// Anything other than `Granted` means no updates will arrive; the watch
/// refuses to start rather than silently never alarming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        *self == PermissionState::Granted
    }
}

/// Upstream feed of GPS fixes with subscribe/unsubscribe semantics
///
/// `stop_updates` must take effect synchronously: after it returns, no
/// further fixes are delivered. Both calls are invoked at most once per
/// started session by the controller.
pub trait PositionSource {
    /// Current permission state of the underlying provider
    fn permission(&self) -> PermissionState;

    /// Begin delivering fixes
    fn start_updates(&mut self) -> WatchResult<()>;

    /// Stop delivering fixes
    fn stop_updates(&mut self) -> WatchResult<()>;
}
