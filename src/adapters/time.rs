//! ESP32 time adapters.
//!
//! - [`SystemClock`]: monotonic time since boot ([`Clock`]).
//! - [`IntervalTicker`]: fixed-interval tick source ([`Ticker`]).
//!
//! On `target_os = "espidf"` these wrap `esp_timer_get_time()` and the
//! FreeRTOS delay; elsewhere `std::time::Instant` and `thread::sleep`
//! stand in for host-side simulation.

use core::time::Duration;

use crate::app::ports::{Clock, Ticker};

/// Monotonic clock for the ESP32-S3 platform.
pub struct SystemClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    /// Time since boot (microsecond resolution).
    #[cfg(target_os = "espidf")]
    fn now(&self) -> Duration {
        // SAFETY: esp_timer_get_time reads the free-running system timer;
        // it has no preconditions once the IDF runtime is up.
        let us = unsafe { esp_idf_sys::esp_timer_get_time() };
        Duration::from_micros(us as u64)
    }

    /// Time since this clock was created.
    #[cfg(not(target_os = "espidf"))]
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Sleeps one control interval per tick.
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Ticker for IntervalTicker {
    #[cfg(target_os = "espidf")]
    fn wait_next(&mut self) {
        let ms = u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX);
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn wait_next(&mut self) {
        std::thread::sleep(self.interval);
    }
}
