//! Forced-ventilation duty-cycle timer.
//!
//! Fans are forced on for `window` at the start of every `period`,
//! regardless of temperature:
//!
//! ```text
//!  cycle_start                                     cycle_start'
//!  │◀── window ──▶│◀──────────── idle gap ────────▶│
//!  │   ACTIVE     │           inactive             │ reset (inactive)
//!  └──────────────┴────────────────────────────────┴──────────▶ time
//!  │◀─────────────────────── period ──────────────▶│
//! ```
//!
//! The window start only moves when a query lands at or after the end of
//! the period, and that query itself reports inactive.  The next window
//! therefore begins up to one cycle interval late; callers polling at a
//! fixed cadence never drift by more than one interval per period.

use core::time::Duration;

use log::info;

use crate::config::ControllerConfig;

#[derive(Debug, Clone)]
pub struct AirCycleTimer {
    window: Duration,
    period: Duration,
    /// Start of the current period.  Only ever moves forward.
    cycle_start: Duration,
}

impl AirCycleTimer {
    /// `window` must not exceed `period`; [`ControllerConfig::validate`]
    /// enforces this for configured timers.
    pub fn new(window: Duration, period: Duration, start: Duration) -> Self {
        debug_assert!(window <= period, "air-cycle window longer than period");
        Self {
            window,
            period,
            cycle_start: start,
        }
    }

    pub fn from_config(config: &ControllerConfig, start: Duration) -> Self {
        Self::new(config.air_cycle_window(), config.air_cycle_period(), start)
    }

    /// Whether forced ventilation is active at `now`.
    ///
    /// Resets the period start when a full period has elapsed.  A `now`
    /// earlier than the period start counts as zero elapsed time.
    pub fn is_active(&mut self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.cycle_start);

        if elapsed < self.window {
            return true;
        }

        if elapsed >= self.period {
            info!(
                "Air cycle: period elapsed after {}s, next window starts now",
                elapsed.as_secs()
            );
            self.cycle_start = now;
        }

        false
    }

    /// Start of the current period.
    pub fn cycle_start(&self) -> Duration {
        self.cycle_start
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
