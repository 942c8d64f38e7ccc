//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ClimateController (domain)
//! ```
//!
//! Driven adapters (sensor, relays, console, clock) implement these
//! traits.  The [`ClimateController`](super::service::ClimateController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use core::time::Duration;

use crate::error::SensorFault;

use super::events::StatusReport;
use super::model::{ActuatorCommand, SensorSample};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
pub trait SensorPort {
    /// Perform exactly one sensor transaction.
    ///
    /// May block up to the implementation's own timeout.  Implementations
    /// must not retry internally; retry policy belongs to the caller.
    fn read(&mut self) -> Result<SensorSample, SensorFault>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the relays.
pub trait ActuatorPort {
    /// Drive both relays to `command`.
    ///
    /// Must be idempotent: re-applying the same command has no further
    /// effect and never fails.
    fn apply(&mut self, command: ActuatorCommand);
}

// ───────────────────────────────────────────────────────────────
// Status sink port (driven adapter: domain → console / indicator)
// ───────────────────────────────────────────────────────────────

/// Human-readable status output plus the fatal-condition indicator.
///
/// Both calls are best-effort: an adapter that fails to emit must swallow
/// the failure rather than abort the control cycle.
pub trait StatusSink {
    /// Report one successful cycle.
    fn emit(&mut self, report: &StatusReport);

    /// Report the fault that halted the run, distinctly from a status line.
    fn emit_fatal(&mut self, fault: SensorFault);
}

// ───────────────────────────────────────────────────────────────
// Time ports (driven adapters: system timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since boot.  Never decreases.
    fn now(&self) -> Duration;
}

/// Tick source that paces the control loop.
///
/// The real adapter sleeps for the cycle interval; tests substitute a
/// ticker that advances a fake clock instead.
pub trait Ticker {
    /// Block until the next cycle is due.
    fn wait_next(&mut self);
}
