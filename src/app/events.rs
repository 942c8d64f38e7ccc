//! Outbound reports.
//!
//! The [`ClimateController`](super::service::ClimateController) emits these
//! through the [`StatusSink`](super::ports::StatusSink) port.  Adapters on
//! the other side decide where the text goes (USB serial, UART, a log).

use core::fmt::{self, Write as _};

use crate::control::units::TemperatureUnit;
use crate::error::SensorFault;

use super::model::ActuatorCommand;

/// Longest status line: the fixed text plus a 40-odd digit `f32::MAX`.
pub const STATUS_LINE_CAPACITY: usize = 128;

/// Result of one successful control cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    /// Temperature in `unit`.
    pub temperature: f32,
    pub unit: TemperatureUnit,
    pub humidity_percent: f32,
    /// Whether the forced-ventilation window was open this cycle.
    pub air_cycle_active: bool,
    /// What was applied to the relays.
    pub command: ActuatorCommand,
}

impl StatusReport {
    /// Render into a fixed-capacity buffer (no heap).
    pub fn to_line(&self) -> Result<heapless::String<STATUS_LINE_CAPACITY>, fmt::Error> {
        let mut line = heapless::String::new();
        write!(line, "{self}")?;
        Ok(line)
    }
}

impl fmt::Display for StatusReport {
    /// `Current Temperature: 85.00F, Air Cycle Active: Yes, Heat Pads Active: No`
    ///
    /// "Air Cycle Active" reports the fans relay, whichever reason turned
    /// it on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Temperature: {:.2}{}, Air Cycle Active: {}, Heat Pads Active: {}",
            self.temperature,
            self.unit,
            yes_no(self.command.ventilation_on),
            yes_no(self.command.heating_on),
        )
    }
}

/// The single line reported when a sensor fault halts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatalReport(pub SensorFault);

impl fmt::Display for FatalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Temperature sensor reading failed: {}", self.0)
    }
}

fn yes_no(on: bool) -> &'static str {
    if on { "Yes" } else { "No" }
}
