//! Wall-clock source for the timestamp column.

use chrono::{Local, Timelike};

/// Hour, minute, second and millisecond of the local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeOfDay {
    #[must_use]
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// `HH:MM:SS:mmm`, every field zero-padded.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}:{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Golden-output tests need a frozen clock; production reads the system one.
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Local system time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = Local::now();
        // Leap seconds surface as nanosecond values past 1e9
        let millisecond = (now.nanosecond() / 1_000_000).min(999);
        TimeOfDay::new(now.hour(), now.minute(), now.second(), millisecond)
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
