//! Display formatting for coordinates, distances and watch snapshots
//!
//! These are the strings a UI layer shows verbatim; the layouts (column
//! padding, truncated seconds, the `(+/- e)` error suffix) are part of the
//! contract and covered by tests.

use crate::api::types::WatchStatus;
use serde::Serialize;

/// Format the absolute value of a decimal coordinate as degrees, minutes and
/// seconds: `D° M' S''`
///
/// Degrees are right-aligned to three columns. Seconds are truncated, not
/// rounded, to at most two decimal places. The sign is dropped; callers
/// express it through a cardinal suffix instead.
pub fn to_degrees_minutes_seconds(coordinate_deg: f64) -> String {
    let absolute = coordinate_deg.abs();
    let degrees = absolute.floor();
    let mins = (absolute - degrees) * 60.0;
    let mins_floored = mins.floor();
    let seconds = ((mins - mins_floored) * 6000.0).floor() / 100.0;

    let s1 = if degrees < 100.0 { " " } else { "" };
    let s2 = if degrees < 10.0 { " " } else { "" };
    format!("{}{}{}° {}' {}''", s1, s2, degrees, mins_floored, seconds)
}

/// Latitude as DMS with cardinal suffix (non-negative is N)
pub fn format_latitude_dms(lat: f64) -> String {
    let card = if lat >= 0.0 { "N" } else { "S" };
    format!("{} {}", to_degrees_minutes_seconds(lat), card)
}

/// Longitude as DMS with cardinal suffix (non-negative is E)
pub fn format_longitude_dms(lng: f64) -> String {
    let card = if lng >= 0.0 { "E" } else { "W" };
    format!("{} {}", to_degrees_minutes_seconds(lng), card)
}

/// Distance in whole meters with the combined error when known
///
/// A missing distance renders as the `" - "` placeholder.
pub fn format_distance_with_error(distance_m: Option<f64>, error_m: Option<f64>) -> String {
    let Some(d) = distance_m else {
        return " - ".to_string();
    };
    let e = match error_m {
        Some(err) => format!(" (+/- {})", err.round()),
        None => String::new(),
    };
    format!("{}{} m", d.round(), e)
}

/// Reported fix accuracy in floored meters, or "unknown"
pub fn format_accuracy(accuracy_m: Option<f64>) -> String {
    match accuracy_m {
        Some(acc) if acc > 0.0 => format!("{} m", acc.floor()),
        _ => "unknown".to_string(),
    }
}

/// Compass heading right-aligned to three columns, or "-" when absent
pub fn format_heading(heading_deg: Option<f64>) -> String {
    match heading_deg {
        None => "-".to_string(),
        Some(d) if d >= 100.0 => format!("{}°", d.round()),
        Some(d) if d >= 10.0 => format!(" {}°", d.round()),
        Some(d) => format!("  {}°", d.round()),
    }
}

/// Point-in-time view of a watch session for display or logging
#[derive(Debug, Clone, Serialize)]
pub struct WatchSnapshot {
    /// Current lifecycle state
    pub status: WatchStatus,
    /// Net out-of-radius count
    pub counter: u32,
    /// Counts required to alarm
    pub margin: u32,
    /// Watch radius (meters)
    pub radius_m: f64,
    /// Smoothed distance to the anchor (meters), once a fix has arrived
    pub distance_m: Option<f64>,
    /// Combined accuracy of the last fix and the anchor fix (meters)
    pub accuracy_m: Option<f64>,
    /// Timestamp of the last fix (milliseconds since epoch)
    pub timestamp_ms: Option<u64>,
}

/// Human-readable text formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    /// Render a single line instead of the block layout
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Format a watch snapshot as human-readable text
    pub fn format_text(&self, snapshot: &WatchSnapshot) -> String {
        let status = match snapshot.status {
            WatchStatus::Idle => "Not watching.",
            WatchStatus::Armed => "Watching...",
            WatchStatus::Alarming => "Anchor dragging!",
        };
        let distance = format_distance_with_error(snapshot.distance_m, snapshot.accuracy_m);

        if self.compact {
            return format!(
                "{} drift {} of {} m, counter {}/{}",
                status, distance, snapshot.radius_m, snapshot.counter, snapshot.margin
            );
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", status));
        output.push_str(&format!("  Drift:   {}\n", distance));
        output.push_str(&format!("  Radius:  {} m\n", snapshot.radius_m));
        output.push_str(&format!(
            "  Counter: {}/{}\n",
            snapshot.counter, snapshot.margin
        ));
        if let Some(ts) = snapshot.timestamp_ms {
            output.push_str(&format!("  Fix at:  {} ms\n", ts));
        }
        output
    }
}

/// JSON formatter for structured output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format a watch snapshot as a JSON string
    pub fn format_json(&self, snapshot: &WatchSnapshot) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_layout() {
        assert_eq!(to_degrees_minutes_seconds(49.26), " 49° 15' 36''");
        assert_eq!(to_degrees_minutes_seconds(5.5), "  5° 30' 0''");
        assert_eq!(to_degrees_minutes_seconds(123.456), "123° 27' 21.6''");
    }

    #[test]
    fn test_dms_seconds_are_truncated() {
        // 59.9994' would round up to a full minute; truncation keeps 59.96''
        assert_eq!(to_degrees_minutes_seconds(0.99999), "  0° 59' 59.96''");
    }

    #[test]
    fn test_dms_drops_sign_for_cardinal_suffix() {
        assert_eq!(
            to_degrees_minutes_seconds(-49.26),
            to_degrees_minutes_seconds(49.26)
        );
        assert_eq!(format_latitude_dms(-49.26), " 49° 15' 36'' S");
        assert_eq!(format_latitude_dms(49.26), " 49° 15' 36'' N");
        assert_eq!(format_longitude_dms(-123.14), "123° 8' 24'' W");
        assert_eq!(format_longitude_dms(0.0), "  0° 0' 0'' E");
    }

    #[test]
    fn test_distance_formatting() {
        assert_eq!(format_distance_with_error(None, None), " - ");
        assert_eq!(format_distance_with_error(None, Some(4.0)), " - ");
        assert_eq!(format_distance_with_error(Some(52.4), None), "52 m");
        assert_eq!(
            format_distance_with_error(Some(52.4), Some(7.8)),
            "52 (+/- 8) m"
        );
    }

    #[test]
    fn test_accuracy_formatting() {
        assert_eq!(format_accuracy(None), "unknown");
        assert_eq!(format_accuracy(Some(0.0)), "unknown");
        assert_eq!(format_accuracy(Some(12.9)), "12 m");
    }

    #[test]
    fn test_heading_formatting() {
        assert_eq!(format_heading(None), "-");
        assert_eq!(format_heading(Some(7.0)), "  7°");
        assert_eq!(format_heading(Some(42.0)), " 42°");
        assert_eq!(format_heading(Some(242.6)), "243°");
    }

    fn snapshot() -> WatchSnapshot {
        WatchSnapshot {
            status: WatchStatus::Armed,
            counter: 1,
            margin: 3,
            radius_m: 30.0,
            distance_m: Some(12.3),
            accuracy_m: Some(5.0),
            timestamp_ms: Some(1_000),
        }
    }

    #[test]
    fn test_text_formatter() {
        let text = TextFormatter::new().format_text(&snapshot());
        assert!(text.starts_with("Watching...\n"));
        assert!(text.contains("  Drift:   12 (+/- 5) m\n"));
        assert!(text.contains("  Counter: 1/3\n"));

        let line = TextFormatter::compact().format_text(&snapshot());
        assert_eq!(line, "Watching... drift 12 (+/- 5) m of 30 m, counter 1/3");
    }

    #[test]
    fn test_json_formatter() {
        let json = JsonFormatter::new().format_json(&snapshot()).unwrap();
        assert!(json.contains("\"status\":\"Armed\""));
        assert!(json.contains("\"counter\":1"));
        assert!(json.contains("\"radius_m\":30.0"));
    }
}
