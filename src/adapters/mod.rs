//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                     |
//! |------------|--------------|---------------------------------|
//! | `hardware` | ActuatorPort | Fans + heat-pads relay GPIOs    |
//! | `console`  | StatusSink   | Serial console + power LED      |
//! | `time`     | Clock        | ESP32 system timer              |
//! |            | Ticker       | FreeRTOS delay                  |
//!
//! The sensor side is implemented directly by
//! [`Dht22`](crate::sensors::dht22::Dht22).

pub mod console;
pub mod hardware;
pub mod time;
