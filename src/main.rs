//! Scripted anchor-watch demo
//!
//! Simulates one night at anchor: a vessel swinging inside the radius, a
//! single GPS glitch, then a genuine drag and recovery. Run with
//! `RUST_LOG=debug` to see the per-fix detector decisions.

use anchor_watch::{
    destination, AlarmSink, AnchorTarget, Coordinate, JsonFormatter, MockPositionSource,
    PositionReading, TextFormatter, WatchConfig, WatchController,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Alarm sink that logs instead of playing a sound
struct LogAlarm;

impl AlarmSink for LogAlarm {
    fn start_alarm(&mut self) {
        info!("ALARM: anchor dragging");
    }

    fn stop_alarm(&mut self) {
        info!("alarm silenced");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let anchor_coord = Coordinate::new(49.26, -123.14)?;
    let anchor = AnchorTarget {
        coord: anchor_coord,
        accuracy_m: Some(5.0),
    };

    let mut source = MockPositionSource::new();
    let mut ts = 0u64;
    let mut push = |source: &mut MockPositionSource, meters: f64, accuracy: Option<f64>| {
        let coord = destination(0.0, meters / 1000.0, &anchor_coord);
        source.push_reading(PositionReading::new(coord, ts, accuracy));
        ts += 5_000;
    };

    // Calm swing at anchor
    for d in [8.0, 12.0, 10.0, 15.0, 9.0] {
        push(&mut source, d, Some(6.0));
    }
    // One transient GPS jump, not a drag
    push(&mut source, 80.0, Some(40.0));
    for d in [11.0, 13.0] {
        push(&mut source, d, Some(6.0));
    }
    // The anchor lets go: sustained drift past the radius
    for d in [35.0, 48.0, 62.0, 75.0, 90.0] {
        push(&mut source, d, Some(6.0));
    }
    // Crew resets the hook, vessel works back inside
    for d in [40.0, 20.0, 12.0, 10.0, 10.0] {
        push(&mut source, d, Some(6.0));
    }

    let config = WatchConfig::default();
    let mut controller = WatchController::new(source, LogAlarm, config)?;
    controller.set_target(anchor);
    controller.start_watch()?;

    let text = TextFormatter::compact();
    while let Some(reading) = controller.source_mut().next_reading() {
        controller.on_position(&reading);
        info!("{}", text.format_text(&controller.snapshot()));
    }

    let json = JsonFormatter::pretty().format_json(&controller.snapshot())?;
    println!("{}", json);

    controller.stop_watch()?;
    Ok(())
}
