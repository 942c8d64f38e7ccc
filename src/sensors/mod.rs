//! Sensor drivers.
//!
//! The enclosure has a single DHT22 on one GPIO; its driver implements
//! [`SensorPort`](crate::app::ports::SensorPort) directly.

pub mod dht22;
