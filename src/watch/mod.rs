//! The anchor watch proper: drift detection and session lifecycle

pub mod alarm;
pub mod controller;
pub mod detector;

pub use alarm::{AlarmSink, CountingAlarm};
pub use controller::WatchController;
pub use detector::DriftDetector;
