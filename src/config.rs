//! Controller configuration parameters
//!
//! All tunable parameters for the enclosure climate controller.
//! Values are fixed at build/start; nothing mutates them at runtime.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::units::TemperatureUnit;
use crate::error::ConfigError;

/// The DHT22 cannot be sampled more often than once every two seconds.
pub const MIN_CYCLE_INTERVAL_MS: u32 = 2_000;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Timing ---
    /// Delay between control cycles (milliseconds)
    pub cycle_interval_ms: u32,
    /// Settle time before hardware bring-up (milliseconds)
    pub startup_delay_ms: u32,

    // --- Thresholds (in `unit`) ---
    /// Heat pads switch on below this temperature
    pub min_temperature: f32,
    /// Fans switch on above this temperature
    pub max_temperature: f32,
    /// Working unit for thresholds and status output
    pub unit: TemperatureUnit,

    // --- Forced ventilation ---
    /// Minutes of forced ventilation at the start of each period
    pub air_cycle_window_mins: u16,
    /// Length of one forced-ventilation period (minutes)
    pub air_cycle_period_mins: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Timing
            cycle_interval_ms: 60_000, // 1/min
            startup_delay_ms: 60_000,  // one cycle

            // Thresholds
            min_temperature: 70.0,
            max_temperature: 80.0,
            unit: TemperatureUnit::Fahrenheit,

            // Forced ventilation: 15 minutes out of every hour
            air_cycle_window_mins: 15,
            air_cycle_period_mins: 60,
        }
    }
}

impl ControllerConfig {
    /// Reject values the controller cannot run with.  Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_temperature.is_finite() || !self.max_temperature.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "temperature thresholds must be finite",
            ));
        }
        if self.min_temperature >= self.max_temperature {
            return Err(ConfigError::ValidationFailed(
                "min_temperature must be below max_temperature",
            ));
        }
        if self.air_cycle_period_mins == 0 {
            return Err(ConfigError::ValidationFailed(
                "air_cycle_period_mins must be non-zero",
            ));
        }
        if self.air_cycle_window_mins > self.air_cycle_period_mins {
            return Err(ConfigError::ValidationFailed(
                "air_cycle_window_mins must not exceed air_cycle_period_mins",
            ));
        }
        if self.cycle_interval_ms < MIN_CYCLE_INTERVAL_MS {
            return Err(ConfigError::ValidationFailed(
                "cycle_interval_ms is below the sensor's 2 s sampling limit",
            ));
        }
        Ok(())
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.cycle_interval_ms))
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.startup_delay_ms))
    }

    pub fn air_cycle_window(&self) -> Duration {
        Duration::from_secs(u64::from(self.air_cycle_window_mins) * 60)
    }

    pub fn air_cycle_period(&self) -> Duration {
        Duration::from_secs(u64::from(self.air_cycle_period_mins) * 60)
    }
}
