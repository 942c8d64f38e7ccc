//! Binary output driver (relay module or indicator LED).
//!
//! Wraps any `embedded-hal` [`OutputPin`] and tracks the commanded state,
//! so callers think in on/off rather than pin levels.  Relay boards come
//! in both active-high and active-low flavours; [`Polarity`] hides that.
//!
//! ## Safety contract
//!
//! `set` is idempotent and never fails: a pin write error is logged and
//! the commanded state stays unchanged, so the next `set` retries the
//! write.  The fans and heat pads are dumb outputs; the decision to run
//! them belongs to the controller.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: wraps an `esp_idf_hal::gpio::PinDriver` in output mode.
//! On host/test: wraps a mock pin that records levels.

use embedded_hal::digital::OutputPin;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Pin high = on.
    ActiveHigh,
    /// Pin low = on.
    ActiveLow,
}

impl Polarity {
    const fn level_for(self, on: bool) -> bool {
        match self {
            Self::ActiveHigh => on,
            Self::ActiveLow => !on,
        }
    }
}

pub struct OutputSwitch<P> {
    name: &'static str,
    pin: P,
    polarity: Polarity,
    /// Last state successfully written; `None` until the first write.
    state: Option<bool>,
}

impl<P: OutputPin> OutputSwitch<P> {
    /// Wrap `pin`.  The output is left untouched until the first `set`.
    pub fn new(name: &'static str, pin: P, polarity: Polarity) -> Self {
        Self {
            name,
            pin,
            polarity,
            state: None,
        }
    }

    pub fn set(&mut self, on: bool) {
        let high = self.polarity.level_for(on);
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        if result.is_err() {
            warn!("{}: pin write failed (wanted {})", self.name, on_off(on));
            return;
        }

        if self.state != Some(on) {
            info!("{}: {}", self.name, on_off(on));
            self.state = Some(on);
        }
    }

    pub fn on(&mut self) {
        self.set(true);
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    /// Whether the output is on.  `false` before the first successful write.
    pub fn is_on(&self) -> bool {
        self.state == Some(true)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the underlying pin (tests inspect the mock level).
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}
