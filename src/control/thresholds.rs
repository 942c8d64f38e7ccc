//! Threshold decision: temperature band + air-cycle flag → relay command.
//!
//! Ventilation and heating are derived independently.  The two relays are
//! physically separate, so nothing here enforces mutual exclusion; with a
//! valid band (`min < max`) they are never both thermally triggered.

use crate::app::model::ActuatorCommand;
use crate::config::ControllerConfig;

/// Inclusive temperature band, in the controller's working unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min: f32,
    pub max: f32,
}

impl Thresholds {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            min: config.min_temperature,
            max: config.max_temperature,
        }
    }

    /// True when `temperature` sits inside the band (bounds included).
    pub fn contains(&self, temperature: f32) -> bool {
        temperature >= self.min && temperature <= self.max
    }
}

/// Compute this cycle's actuator command.
///
/// A NaN temperature compares false against both bounds, so it triggers
/// neither relay; only the air cycle can switch the fans on.
pub fn decide(temperature: f32, air_cycle_active: bool, band: &Thresholds) -> ActuatorCommand {
    ActuatorCommand {
        ventilation_on: temperature > band.max || air_cycle_active,
        heating_on: temperature < band.min,
    }
}
