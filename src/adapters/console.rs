//! Console status sink adapter.
//!
//! Implements [`StatusSink`] by writing one line per cycle to a console
//! writer (USB-CDC / UART stdout in production) and by owning the power
//! indicator LED: lit from construction, switched off by the fatal report.
//!
//! Emission is best-effort.  Write failures are logged and dropped so a
//! disconnected serial console never stalls the control loop.

use std::io::Write;

use embedded_hal::digital::OutputPin;
use log::{error, info, warn};

use crate::app::events::{FatalReport, StatusReport};
use crate::app::ports::StatusSink;
use crate::drivers::switch::OutputSwitch;
use crate::error::SensorFault;

pub struct ConsoleStatusSink<W, P> {
    out: W,
    indicator: OutputSwitch<P>,
}

impl<W: Write, P: OutputPin> ConsoleStatusSink<W, P> {
    /// Wrap `out` and light the indicator to show the controller is up.
    pub fn new(out: W, mut indicator: OutputSwitch<P>) -> Self {
        indicator.on();
        Self { out, indicator }
    }

    pub fn indicator(&self) -> &OutputSwitch<P> {
        &self.indicator
    }

    /// Give the writer back (tests read what was written).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        let result = writeln!(self.out, "{line}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("Console write failed: {}", e);
        }
    }
}

impl<W: Write, P: OutputPin> StatusSink for ConsoleStatusSink<W, P> {
    fn emit(&mut self, report: &StatusReport) {
        match report.to_line() {
            Ok(line) => {
                self.write_line(&line);
                info!("STATUS | {} | RH={:.1}%", line, report.humidity_percent);
            }
            Err(_) => warn!("Status line did not fit the buffer: {:?}", report),
        }
    }

    fn emit_fatal(&mut self, fault: SensorFault) {
        let line = FatalReport(fault).to_string();
        self.write_line(&line);
        error!("FAULT | {}", line);
        self.indicator.off();
    }
}
