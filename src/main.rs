//! Enclosure climate controller firmware: main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Dht22          RelayBank        ConsoleStatusSink             │
//! │  (SensorPort)   (ActuatorPort)   (StatusSink + power LED)      │
//! │  SystemClock    IntervalTicker                                 │
//! │  (Clock)        (Ticker)                                       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          ClimateController (pure logic)                │    │
//! │  │  units · air-cycle timer · threshold band              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  scheduler::run_until_halt (one cycle per interval)            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use log::{error, info, warn};

use climate::adapters::console::ConsoleStatusSink;
use climate::adapters::hardware::RelayBank;
use climate::adapters::time::{IntervalTicker, SystemClock};
use climate::app::ports::Clock;
use climate::app::service::ClimateController;
use climate::config::ControllerConfig;
use climate::drivers::hw_init;
use climate::drivers::switch::{OutputSwitch, Polarity};
use climate::pins;
use climate::scheduler;
use climate::sensors::dht22::Dht22;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Enclosure climate v{}            ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config could not be serialised for logging: {}", e),
    }

    // ── 3. Sensor settle time ─────────────────────────────────
    info!(
        "Waiting {}s for the sensor to stabilise",
        config.startup_delay().as_secs()
    );
    FreeRtos::delay_ms(config.startup_delay_ms);

    // ── 4. Hardware + adapters ────────────────────────────────
    let board = hw_init::init_peripherals()?;

    let mut sensor = Dht22::new(board.sensor, Ets);
    let mut relays = RelayBank::new(
        OutputSwitch::new("fans", board.fans, pins::RELAY_POLARITY),
        OutputSwitch::new("heat pads", board.heat_pads, pins::RELAY_POLARITY),
    );
    relays.all_off();
    let mut status = ConsoleStatusSink::new(
        std::io::stdout(),
        OutputSwitch::new("power led", board.power_led, Polarity::ActiveHigh),
    );

    let clock = SystemClock::new();
    let mut ticker = IntervalTicker::new(config.cycle_interval());

    // ── 5. Control loop ───────────────────────────────────────
    let mut controller = ClimateController::new(config, clock.now());
    info!("System ready. Entering control loop.");

    let fault = scheduler::run_until_halt(
        &mut controller,
        &clock,
        &mut ticker,
        &mut sensor,
        &mut relays,
        &mut status,
    );

    // ── 6. Halted ─────────────────────────────────────────────
    // Dropping the pin drivers would reset the relay GPIOs, so the
    // adapters stay alive and this task parks for good.
    error!("Controller halted: {}. Restart the device to resume.", fault);
    loop {
        FreeRtos::delay_ms(u32::MAX);
    }
}
