//! Alarm sink boundary

/// Side-effecting alarm collaborator (sound, notification)
///
/// The core only signals transitions; rendering and playback stay with the
/// host. `start_alarm` is invoked once per raise, never repeated while the
/// alarm stays on.
pub trait AlarmSink {
    fn start_alarm(&mut self);
    fn stop_alarm(&mut self);
}

/// Recording alarm sink for tests and the demo binary
#[derive(Debug, Clone, Default)]
pub struct CountingAlarm {
    ringing: bool,
    starts: u32,
    stops: u32,
}

impl CountingAlarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ringing(&self) -> bool {
        self.ringing
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl AlarmSink for CountingAlarm {
    fn start_alarm(&mut self) {
        self.ringing = true;
        self.starts += 1;
    }

    fn stop_alarm(&mut self) {
        self.ringing = false;
        self.stops += 1;
    }
}
