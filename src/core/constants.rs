//! Physical constants and system parameters

/// Mean Earth radius used for all great-circle math (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_010.0;

/// Mean Earth radius in kilometers, for callers working in km
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS_M / 1000.0;

/// Acceptable single-fix horizontal accuracy before a poor-GPS warning (meters)
pub const ACCURACY_THRESHOLD_M: f64 = 70.0;

/// Out-of-radius counts required before the alarm is raised
pub const DEFAULT_WATCH_MARGIN: u32 = 3;

/// Default watch radius around the anchor (meters)
pub const DEFAULT_RADIUS_M: f64 = 30.0;

/// Threshold for floating-point equality against zero
pub const FLOAT_EPS: f64 = 1e-6;
