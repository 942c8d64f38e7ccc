//! GPIO pin assignments for the enclosure controller board.
//!
//! Single source of truth: drivers and logs reference this module rather
//! than hard-coding pin numbers.  `hw_init` claims the matching `gpioN`
//! peripherals; keep the two in step when rewiring.

use crate::drivers::switch::Polarity;

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------

/// DHT22 single-wire data line (open-drain, pulled up).
pub const DHT22_DATA_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Relays
// ---------------------------------------------------------------------------

/// Ventilation fans relay.
pub const FANS_RELAY_GPIO: i32 = 5;
/// Heat pads relay.
pub const HEAT_PADS_RELAY_GPIO: i32 = 6;
/// Both relay channels on the board switch on with a HIGH input.
pub const RELAY_POLARITY: Polarity = Polarity::ActiveHigh;

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// Power/health LED: lit while the controller runs, dark once halted.
pub const POWER_LED_GPIO: i32 = 2;
