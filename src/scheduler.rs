//! Control-cycle driver.
//!
//! Runs [`ClimateController::run_cycle`] once per tick until the
//! controller halts.  The pacing comes from an injected [`Ticker`] and
//! the timestamps from an injected [`Clock`], so the same loop runs on
//! the FreeRTOS delay in production and on a fake clock in tests.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  loop                                                        │
//! │   clock.now() ──▶ run_cycle(now) ──▶ Continue ──▶ ticker.wait │
//! │                        │                              │      │
//! │                        │              ◀───────────────┘      │
//! │                        └──▶ Halt(fault) ──▶ return fault     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cycles never overlap: the next one starts only after the previous one
//! has read, decided, acted and reported.  Halting is only observed at
//! cycle boundaries and the driver never waits after a halt.

use log::info;

use crate::app::ports::{ActuatorPort, Clock, SensorPort, StatusSink, Ticker};
use crate::app::service::{ClimateController, CycleOutcome};
use crate::error::SensorFault;

/// Drive `controller` until a sensor fault halts it, and return that fault.
///
/// There is no other way out: without a fault this runs until the process
/// is terminated.
pub fn run_until_halt(
    controller: &mut ClimateController,
    clock: &impl Clock,
    ticker: &mut impl Ticker,
    sensor: &mut impl SensorPort,
    actuators: &mut impl ActuatorPort,
    status: &mut impl StatusSink,
) -> SensorFault {
    info!("Scheduler: entering control loop");
    loop {
        match controller.run_cycle(clock.now(), sensor, actuators, status) {
            CycleOutcome::Continue => ticker.wait_next(),
            CycleOutcome::Halt(fault) => {
                info!(
                    "Scheduler: halted after {} cycles",
                    controller.cycle_count()
                );
                return fault;
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
