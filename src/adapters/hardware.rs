//! Hardware adapter: bridges the relay outputs to the actuator port.
//!
//! Owns the fans and heat-pads [`OutputSwitch`]es and exposes them through
//! [`ActuatorPort`].  Together with the DHT22 driver this is the only code
//! that touches the relay GPIOs.

use embedded_hal::digital::OutputPin;

use crate::app::model::ActuatorCommand;
use crate::app::ports::ActuatorPort;
use crate::drivers::switch::OutputSwitch;

/// The two independent relay channels.
pub struct RelayBank<F, H> {
    fans: OutputSwitch<F>,
    heat_pads: OutputSwitch<H>,
}

impl<F: OutputPin, H: OutputPin> RelayBank<F, H> {
    pub fn new(fans: OutputSwitch<F>, heat_pads: OutputSwitch<H>) -> Self {
        Self { fans, heat_pads }
    }

    /// Both relays off: boot state.
    pub fn all_off(&mut self) {
        self.apply(ActuatorCommand::all_off());
    }

    /// Commanded relay state, read back from the drivers.
    pub fn current(&self) -> ActuatorCommand {
        ActuatorCommand {
            ventilation_on: self.fans.is_on(),
            heating_on: self.heat_pads.is_on(),
        }
    }

    pub fn fans(&self) -> &OutputSwitch<F> {
        &self.fans
    }

    pub fn heat_pads(&self) -> &OutputSwitch<H> {
        &self.heat_pads
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<F: OutputPin, H: OutputPin> ActuatorPort for RelayBank<F, H> {
    fn apply(&mut self, command: ActuatorCommand) {
        self.fans.set(command.ventilation_on);
        self.heat_pads.set(command.heating_on);
    }
}
