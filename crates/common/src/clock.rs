//! Clock and cadence utilities.
//!
//! All live GraceNav timestamps are anchored to a monotonic epoch captured
//! when a session starts. Scheduled activation/deactivation checks and the
//! periodic history-decay tick both work in nanoseconds relative to that
//! epoch, which keeps the core engine free of wall-clock reads.

use std::time::Instant;

/// A session clock that provides monotonic timestamps relative to a fixed
/// epoch (the moment the menu driver started).
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new session clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Nanoseconds elapsed since the session started.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Seconds elapsed since the session started.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}

/// Fixed-interval gate for the history-decay tick.
///
/// The decay cadence is independent of sample arrival: the driver asks
/// `should_tick` on every loop pass and ages out the oldest motion sample
/// whenever an interval has elapsed. The first call always fires.
#[derive(Debug)]
pub struct DecayCadence {
    interval_ns: u64,
    last_tick_ns: Option<u64>,
}

impl DecayCadence {
    /// Create a cadence with the given interval in milliseconds.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ns: (interval_ms * 1_000_000.0) as u64,
            last_tick_ns: None,
        }
    }

    /// Create a cadence with the given interval in nanoseconds.
    pub fn from_interval_ns(interval_ns: u64) -> Self {
        Self {
            interval_ns,
            last_tick_ns: None,
        }
    }

    /// Check if an interval has passed since the last tick, updating
    /// internal state when it has.
    pub fn should_tick(&mut self, current_ns: u64) -> bool {
        match self.last_tick_ns {
            None => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last + self.interval_ns => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }

    /// Interval in nanoseconds.
    pub fn interval_ns(&self) -> u64 {
        self.interval_ns
    }
}
