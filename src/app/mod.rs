//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the climate controller:
//! unit conversion, the forced-ventilation timer, the threshold decision
//! and the fault-escalation policy.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod model;
pub mod ports;
pub mod service;
