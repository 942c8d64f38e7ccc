//! Fuzz target: `dht22::decode`
//!
//! Arbitrary 5-byte frames must either decode into the sensor's rated
//! range or come back as a typed fault, never panic.
//!
//! cargo fuzz run fuzz_dht22_decode

#![no_main]

use climate::error::SensorFault;
use climate::sensors::dht22::{FRAME_LEN, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(frame) = <[u8; FRAME_LEN]>::try_from(data) else {
        return;
    };

    match decode(frame) {
        Ok(sample) => {
            assert!((-40.0..=80.0).contains(&sample.temperature_celsius));
            assert!((0.0..=100.0).contains(&sample.humidity_percent));
        }
        Err(SensorFault::ChecksumError | SensorFault::OutOfRange) => {}
        Err(other) => panic!("decode produced a bus-level fault: {other:?}"),
    }
});
