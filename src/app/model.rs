//! Per-cycle data model.
//!
//! Both types are produced fresh every cycle and dropped at its end;
//! nothing here is persisted.

/// One successful sensor read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSample {
    /// Air temperature as reported by the sensor (°C).
    pub temperature_celsius: f32,
    /// Relative humidity (%).
    pub humidity_percent: f32,
}

/// Desired state of the two relays for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorCommand {
    /// Fans relay.
    pub ventilation_on: bool,
    /// Heat-pads relay.
    pub heating_on: bool,
}

impl ActuatorCommand {
    /// Both relays off.
    pub const fn all_off() -> Self {
        Self {
            ventilation_on: false,
            heating_on: false,
        }
    }
}
