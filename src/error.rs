//! Error types for the climate controller.
//!
//! The control core models exactly one failure category: a sensor read
//! that did not produce a sample.  Actuator writes and status output are
//! infallible from the controller's point of view; their adapters absorb
//! and log I/O failures.  Configuration errors only occur at boot.

use core::fmt;

// ---------------------------------------------------------------------------
// Sensor faults
// ---------------------------------------------------------------------------

/// Why a sensor read failed.
///
/// Any fault is terminal for the current run: the controller never retries
/// and halts on the first one it observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorFault {
    /// The transmitted checksum byte does not match the data bytes.
    ChecksumError,
    /// A data bit edge did not arrive in time mid-transaction.
    Timeout,
    /// The sensor never acknowledged the start signal.
    NotReady,
    /// The frame decoded to a value outside the sensor's rated range.
    OutOfRange,
    /// The data pin itself reported an error.
    Io,
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecksumError => write!(f, "checksum mismatch"),
            Self::Timeout => write!(f, "timed out"),
            Self::NotReady => write!(f, "sensor not ready"),
            Self::OutOfRange => write!(f, "reading out of range"),
            Self::Io => write!(f, "data pin I/O error"),
        }
    }
}

impl std::error::Error for SensorFault {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors raised while validating a [`ControllerConfig`](crate::config::ControllerConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
