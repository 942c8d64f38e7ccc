//! One-shot hardware peripheral initialization.
//!
//! Takes the ESP32-S3 peripherals singleton and configures the four GPIOs
//! the controller uses.  Called once from `main()` after the startup
//! settle delay and before the control loop starts.  Output levels are
//! not set here; the adapters drive them to their boot state.

#[cfg(target_os = "espidf")]
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, IOPin, InputOutput, Output, OutputPin, PinDriver, Pull};
#[cfg(target_os = "espidf")]
use esp_idf_hal::peripherals::Peripherals;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    PeripheralsTaken(i32),
    GpioConfigFailed { gpio: i32, rc: i32 },
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsTaken(rc) => write!(f, "peripherals already taken (rc={})", rc),
            Self::GpioConfigFailed { gpio, rc } => {
                write!(f, "GPIO{} config failed (rc={})", gpio, rc)
            }
        }
    }
}

impl std::error::Error for HwInitError {}

// ── Board ─────────────────────────────────────────────────────

/// Every pin the controller owns, configured and ready for the adapters.
#[cfg(target_os = "espidf")]
pub struct Board {
    /// DHT22 data line: open-drain with the internal pull-up enabled.
    pub sensor: PinDriver<'static, AnyIOPin, InputOutput>,
    pub fans: PinDriver<'static, AnyOutputPin, Output>,
    pub heat_pads: PinDriver<'static, AnyOutputPin, Output>,
    pub power_led: PinDriver<'static, AnyOutputPin, Output>,
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<Board, HwInitError> {
    let p = Peripherals::take().map_err(|e| HwInitError::PeripheralsTaken(e.code()))?;

    let mut sensor = PinDriver::input_output_od(p.pins.gpio4.downgrade())
        .map_err(gpio_err(pins::DHT22_DATA_GPIO))?;
    sensor
        .set_pull(Pull::Up)
        .map_err(gpio_err(pins::DHT22_DATA_GPIO))?;

    let fans = PinDriver::output(p.pins.gpio5.downgrade_output())
        .map_err(gpio_err(pins::FANS_RELAY_GPIO))?;
    let heat_pads = PinDriver::output(p.pins.gpio6.downgrade_output())
        .map_err(gpio_err(pins::HEAT_PADS_RELAY_GPIO))?;
    let power_led = PinDriver::output(p.pins.gpio2.downgrade_output())
        .map_err(gpio_err(pins::POWER_LED_GPIO))?;

    info!(
        "hw_init: DHT22=GPIO{} fans=GPIO{} heat_pads=GPIO{} power_led=GPIO{}",
        pins::DHT22_DATA_GPIO,
        pins::FANS_RELAY_GPIO,
        pins::HEAT_PADS_RELAY_GPIO,
        pins::POWER_LED_GPIO
    );

    Ok(Board {
        sensor,
        fans,
        heat_pads,
        power_led,
    })
}

#[cfg(target_os = "espidf")]
fn gpio_err(gpio: i32) -> impl FnOnce(esp_idf_sys::EspError) -> HwInitError {
    move |e| HwInitError::GpioConfigFailed { gpio, rc: e.code() }
}
