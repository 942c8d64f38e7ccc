//! DHT22 / AM2302 single-wire temperature + humidity sensor.
//!
//! The data line is open-drain with an external pull-up.  One transaction:
//!
//! ```text
//!  host: ──┐   3 ms   ┌─ release
//!          └──────────┘
//!  dht:                  ┐ 80 us ┌ 80 us ┐ 50 ┌ 26/70 ┐ 50 ┌ ...  (40 bits)
//!                        └───────┘       └────┘       └────┘
//! ```
//!
//! A bit is `1` when its high phase lasts longer than ~40 us.  The frame is
//! `[rh_hi, rh_lo, t_hi, t_lo, checksum]`; humidity and temperature are in
//! tenths, temperature is sign-magnitude (bit 15 = negative), and the
//! checksum is the low byte of the sum of the first four bytes.
//!
//! Pulse widths are measured by polling the pin once per microsecond of
//! `DelayNs`, so the counts are approximate; the 0/1 threshold sits well
//! between the two nominal widths.
//!
//! ## Dual-target design
//!
//! Generic over `embedded-hal` 1.0 pin and delay traits.  On ESP-IDF the
//! pin is an open-drain `PinDriver` and the delay is `Ets`; on host the
//! integration tests drive it with a simulated waveform.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::app::model::SensorSample;
use crate::app::ports::SensorPort;
use crate::error::SensorFault;

/// Size of one frame in bytes.
pub const FRAME_LEN: usize = 5;

const START_LOW_US: u32 = 3_000;
/// Sensor must pull the line low within this long after release.
const ACK_WAIT_US: u32 = 60;
const RESPONSE_PHASE_US: u32 = 85;
const BIT_LOW_US: u32 = 56;
const BIT_HIGH_US: u32 = 75;
/// High phase longer than this decodes as `1`.
const ONE_THRESHOLD_US: u32 = 40;

const MIN_CELSIUS: f32 = -40.0;
const MAX_CELSIUS: f32 = 80.0;

pub struct Dht22<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Take ownership of the data pin and leave the line released.
    pub fn new(mut pin: P, delay: D) -> Self {
        // A failed release surfaces as NotReady on the first read.
        let _ = pin.set_high();
        Self { pin, delay }
    }

    /// Give the pin and delay back.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Run one bus transaction and return the raw frame.
    pub fn read_frame(&mut self) -> Result<[u8; FRAME_LEN], SensorFault> {
        // Start signal: hold low, then release and let the pull-up win.
        self.pin.set_low().map_err(|_| SensorFault::Io)?;
        self.delay.delay_us(START_LOW_US);
        self.pin.set_high().map_err(|_| SensorFault::Io)?;

        // Handshake: line goes low, then high, then low again for bit 0.
        self.wait_while(true, ACK_WAIT_US)?
            .ok_or(SensorFault::NotReady)?;
        self.wait_while(false, RESPONSE_PHASE_US)?
            .ok_or(SensorFault::NotReady)?;
        self.wait_while(true, RESPONSE_PHASE_US)?
            .ok_or(SensorFault::NotReady)?;

        let mut frame = [0u8; FRAME_LEN];
        for bit in 0..FRAME_LEN * 8 {
            self.wait_while(false, BIT_LOW_US)?
                .ok_or(SensorFault::Timeout)?;
            let high_us = self
                .wait_while(true, BIT_HIGH_US)?
                .ok_or(SensorFault::Timeout)?;
            if high_us > ONE_THRESHOLD_US {
                frame[bit / 8] |= 0x80 >> (bit % 8);
            }
        }

        debug!("DHT22 frame: {:02x?}", frame);
        Ok(frame)
    }

    /// Poll while the line reads `high`.  Returns the microseconds spent,
    /// or `None` if the level outlasted `max_us`.
    fn wait_while(&mut self, high: bool, max_us: u32) -> Result<Option<u32>, SensorFault> {
        let mut elapsed = 0;
        while self.pin.is_high().map_err(|_| SensorFault::Io)? == high {
            if elapsed >= max_us {
                return Ok(None);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
        Ok(Some(elapsed))
    }
}

impl<P, D> SensorPort for Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read(&mut self) -> Result<SensorSample, SensorFault> {
        let frame = self.read_frame()?;
        decode(frame)
    }
}

/// Validate and decode one raw frame.
pub fn decode(frame: [u8; FRAME_LEN]) -> Result<SensorSample, SensorFault> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorFault::ChecksumError);
    }

    let humidity_tenths = u16::from_be_bytes([frame[0], frame[1]]);
    let magnitude_tenths = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]);

    let humidity_percent = f32::from(humidity_tenths) / 10.0;
    let mut temperature_celsius = f32::from(magnitude_tenths) / 10.0;
    if frame[2] & 0x80 != 0 {
        temperature_celsius = -temperature_celsius;
    }

    if !(MIN_CELSIUS..=MAX_CELSIUS).contains(&temperature_celsius)
        || !(0.0..=100.0).contains(&humidity_percent)
    {
        return Err(SensorFault::OutOfRange);
    }

    Ok(SensorSample {
        temperature_celsius,
        humidity_percent,
    })
}
