//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// I2C operation failed
    I2c(I2cError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Network operation failed
    Network(NetworkError),
}

/// I2C-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus error occurred
    BusError,
    /// No acknowledgment received
    Nack,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid mode for operation
    InvalidMode,
    /// Driving the pin failed
    WriteFailed,
}

/// Network-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetworkError {
    /// Association with the access point failed
    JoinFailed,
    /// Access point not found
    NotFound,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::I2c(e) => write!(f, "I2C error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Network(e) => write!(f, "Network error: {:?}", e),
        }
    }
}
