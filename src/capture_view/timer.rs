// SPDX-License-Identifier: MPL-2.0

//! Recording timer
//!
//! The timer does not keep its own clock. Every tick reads the session's
//! recorded duration and decomposes it into hours, minutes and seconds, so
//! the displayed value can never drift from the recording.
//!
//! Ticks are scheduled as delayed tasks carrying the generation they were
//! scheduled for. Starting or stopping the timer bumps the generation, which
//! turns every tick still in flight into a no-op.

use std::fmt;
use std::time::Duration;

/// Recorded duration split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerReading {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimerReading {
    /// Decompose a duration given in (fractional) seconds
    ///
    /// Negative and non-finite inputs read as zero.
    pub fn from_seconds(total: f64) -> Self {
        if !total.is_finite() || total <= 0.0 {
            return Self::default();
        }

        Self {
            hours: (total / 3600.0).floor() as u64,
            minutes: ((total / 60.0) % 60.0).floor() as u64,
            seconds: (total % 60.0).floor() as u64,
        }
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self::from_seconds(duration.as_secs_f64())
    }
}

impl fmt::Display for TimerReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Tick scheduling state of the recording timer
#[derive(Debug, Clone, Default)]
pub struct RecordTimer {
    generation: u64,
    running: bool,
    last_reading: TimerReading,
}

impl RecordTimer {
    /// Start (or restart) the timer
    ///
    /// Returns the generation the first tick must be scheduled with. Any
    /// tick scheduled before this call is invalidated.
    pub fn start(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        self.last_reading = TimerReading::default();
        self.generation
    }

    /// Whether a tick scheduled for `generation` should still fire
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    /// Store a reading taken on tick
    pub fn record(&mut self, reading: TimerReading) {
        self.last_reading = reading;
    }

    /// Stop the timer after taking the final reading
    ///
    /// Invalidates the pending tick and clears the stored reading.
    pub fn stop(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.running = false;
        self.last_reading = TimerReading::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reading taken on the most recent tick
    pub fn last_reading(&self) -> TimerReading {
        self.last_reading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_mixed_duration() {
        let reading = TimerReading::from_seconds(3725.9);
        assert_eq!(
            reading,
            TimerReading {
                hours: 1,
                minutes: 2,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_decompose_just_under_a_minute() {
        let reading = TimerReading::from_seconds(59.99);
        assert_eq!(reading.hours, 0);
        assert_eq!(reading.minutes, 0);
        assert_eq!(reading.seconds, 59);
    }

    #[test]
    fn test_hours_are_not_wrapped() {
        let reading = TimerReading::from_seconds(100.0 * 3600.0 + 61.0);
        assert_eq!(reading.hours, 100);
        assert_eq!(reading.minutes, 1);
        assert_eq!(reading.seconds, 1);
    }

    #[test]
    fn test_invalid_durations_read_zero() {
        assert_eq!(TimerReading::from_seconds(-4.0), TimerReading::default());
        assert_eq!(TimerReading::from_seconds(f64::NAN), TimerReading::default());
        assert_eq!(
            TimerReading::from_seconds(f64::INFINITY),
            TimerReading::default()
        );
    }

    #[test]
    fn test_display_pads_each_unit() {
        let reading = TimerReading::from_duration(Duration::from_secs(3 * 3600 + 4 * 60 + 7));
        assert_eq!(reading.to_string(), "03:04:07");
    }

    #[test]
    fn test_restart_invalidates_previous_tick() {
        let mut timer = RecordTimer::default();
        let first = timer.start();
        let second = timer.start();

        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
    }

    #[test]
    fn test_stop_invalidates_pending_tick() {
        let mut timer = RecordTimer::default();
        let generation = timer.start();
        timer.record(TimerReading::from_seconds(12.0));

        timer.stop();

        assert!(!timer.is_running());
        assert!(!timer.accepts(generation));
        assert_eq!(timer.last_reading(), TimerReading::default());
    }

    #[test]
    fn test_stop_without_start_is_harmless() {
        let mut timer = RecordTimer::default();
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.accepts(timer.generation()));
    }
}
