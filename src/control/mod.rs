//! Pure control math: unit conversion, the threshold decision and the
//! forced-ventilation duty-cycle timer.  No I/O, no hardware.

pub mod air_cycle;
pub mod thresholds;
pub mod units;
