//! Application service: the hexagonal core.
//!
//! [`ClimateController`] owns the configuration, the air-cycle timer and
//! the run state.  One call to [`ClimateController::run_cycle`] is one
//! control cycle; all I/O flows through port traits injected at the call
//! site, so the whole service is testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ StatusSink
//!                 │    ClimateController      │
//! ActuatorPort ◀──│  units · air cycle · band │
//!                 └──────────────────────────┘
//! ```
//!
//! ```text
//!  RUNNING ──[sample]──▶ RUNNING
//!     │
//!  [sensor fault]
//!     ▼
//!  HALTED   (terminal; only a process restart leaves it)
//! ```

use core::time::Duration;

use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::control::air_cycle::AirCycleTimer;
use crate::control::thresholds::{Thresholds, decide};
use crate::error::SensorFault;

use super::events::StatusReport;
use super::model::ActuatorCommand;
use super::ports::{ActuatorPort, SensorPort, StatusSink};

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// A sensor fault was observed.  There is no transition out.
    Halted(SensorFault),
}

/// What the cycle driver should do after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Schedule the next cycle.
    Continue,
    /// Stop scheduling cycles for good.
    Halt(SensorFault),
}

/// The application service orchestrates one control cycle at a time.
pub struct ClimateController {
    config: ControllerConfig,
    band: Thresholds,
    air_cycle: AirCycleTimer,
    state: RunState,
    cycle_count: u64,
    last_command: Option<ActuatorCommand>,
}

impl ClimateController {
    /// Construct the controller.  `start` is the current monotonic time and
    /// opens the first forced-ventilation window.
    ///
    /// The config is expected to have passed [`ControllerConfig::validate`].
    pub fn new(config: ControllerConfig, start: Duration) -> Self {
        let band = Thresholds::from_config(&config);
        let air_cycle = AirCycleTimer::from_config(&config, start);
        info!(
            "Controller: band {:.1}..{:.1}{}, air cycle {}/{} min",
            band.min,
            band.max,
            config.unit,
            config.air_cycle_window_mins,
            config.air_cycle_period_mins
        );
        Self {
            config,
            band,
            air_cycle,
            state: RunState::Running,
            cycle_count: 0,
            last_command: None,
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one control cycle: read → decide → act → report.
    ///
    /// On a sensor fault the fatal report is emitted, the controller moves
    /// to [`RunState::Halted`] and the relays are left as they were.  Once
    /// halted, further calls touch no port and keep returning `Halt`.
    pub fn run_cycle(
        &mut self,
        now: Duration,
        sensor: &mut impl SensorPort,
        actuators: &mut impl ActuatorPort,
        status: &mut impl StatusSink,
    ) -> CycleOutcome {
        if let RunState::Halted(fault) = self.state {
            return CycleOutcome::Halt(fault);
        }

        // 1. Read sensor via SensorPort
        let sample = match sensor.read() {
            Ok(sample) => sample,
            Err(fault) => return self.halt(fault, status),
        };
        self.cycle_count += 1;

        // 2. Convert to the working unit
        let temperature = self.config.unit.from_celsius(sample.temperature_celsius);

        // 3. Consult the air-cycle timer and decide
        let air_cycle_active = self.air_cycle.is_active(now);
        let command = decide(temperature, air_cycle_active, &self.band);
        debug!(
            "Cycle {}: T={:.2}{} RH={:.1}% air_cycle={} -> {:?}",
            self.cycle_count,
            temperature,
            self.config.unit,
            sample.humidity_percent,
            air_cycle_active,
            command
        );

        // 4. Apply actuator commands via ActuatorPort
        actuators.apply(command);
        self.last_command = Some(command);

        // 5. Report
        status.emit(&StatusReport {
            temperature,
            unit: self.config.unit,
            humidity_percent: sample.humidity_percent,
            air_cycle_active,
            command,
        });

        CycleOutcome::Continue
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, RunState::Halted(_))
    }

    /// Successful cycles since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Command applied by the most recent successful cycle.
    pub fn last_command(&self) -> Option<ActuatorCommand> {
        self.last_command
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn air_cycle(&self) -> &AirCycleTimer {
        &self.air_cycle
    }

    // ── Internal ──────────────────────────────────────────────

    fn halt(&mut self, fault: SensorFault, status: &mut impl StatusSink) -> CycleOutcome {
        error!("Sensor fault ({fault}), halting control loop");
        if let Some(cmd) = self.last_command {
            warn!("Relays keep their last command: {:?}", cmd);
        }
        status.emit_fatal(fault);
        self.state = RunState::Halted(fault);
        CycleOutcome::Halt(fault)
    }
}
