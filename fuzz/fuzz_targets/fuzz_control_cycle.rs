//! Fuzz target: `ClimateController::run_cycle`
//!
//! Feeds arbitrary temperatures (NaN and infinities included) and
//! timestamps through the controller.  Every successful cycle must apply
//! exactly one command and render a status line that fits its buffer.
//!
//! cargo fuzz run fuzz_control_cycle

#![no_main]

use core::time::Duration;

use climate::app::events::StatusReport;
use climate::app::model::{ActuatorCommand, SensorSample};
use climate::app::ports::{ActuatorPort, SensorPort, StatusSink};
use climate::app::service::{ClimateController, CycleOutcome};
use climate::config::ControllerConfig;
use climate::error::SensorFault;
use libfuzzer_sys::fuzz_target;

struct Replay(Option<SensorSample>);

impl SensorPort for Replay {
    fn read(&mut self) -> Result<SensorSample, SensorFault> {
        self.0.take().ok_or(SensorFault::NotReady)
    }
}

#[derive(Default)]
struct Relays {
    applied: usize,
}

impl ActuatorPort for Relays {
    fn apply(&mut self, _command: ActuatorCommand) {
        self.applied += 1;
    }
}

#[derive(Default)]
struct Sink {
    lines: usize,
}

impl StatusSink for Sink {
    fn emit(&mut self, report: &StatusReport) {
        assert!(report.to_line().is_ok(), "status line overflowed");
        self.lines += 1;
    }

    fn emit_fatal(&mut self, _fault: SensorFault) {}
}

fuzz_target!(|input: (u32, u32, u64)| {
    let (t_bits, rh_bits, now_secs) = input;
    let mut ctl = ClimateController::new(ControllerConfig::default(), Duration::ZERO);
    let mut sensor = Replay(Some(SensorSample {
        temperature_celsius: f32::from_bits(t_bits),
        humidity_percent: f32::from_bits(rh_bits),
    }));
    let mut relays = Relays::default();
    let mut sink = Sink::default();

    let now = Duration::from_secs(now_secs);
    assert_eq!(
        ctl.run_cycle(now, &mut sensor, &mut relays, &mut sink),
        CycleOutcome::Continue
    );
    assert_eq!(relays.applied, 1);
    assert_eq!(sink.lines, 1);
});
