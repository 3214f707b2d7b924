//! Motion sensor trait and errors

use core::fmt;

use ezto_core::imu::{RawFrame, Sample};

use crate::platform::error::I2cError;

/// Motion sensor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// A configuration write failed during initialization (register address)
    InitFailed(u8),
    /// Bus transaction failed while reading
    Bus(I2cError),
    /// Driver used before a successful initialization
    NotInitialized,
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::InitFailed(reg) => write!(f, "sensor init failed at register {:#04x}", reg),
            ImuError::Bus(e) => write!(f, "sensor bus error: {:?}", e),
            ImuError::NotInitialized => write!(f, "sensor not initialized"),
        }
    }
}

/// Six-axis motion sensor
pub trait MotionSensor {
    /// Read one sample
    ///
    /// `frame` is caller-owned and reused across reads; on success it holds
    /// the raw register bytes the sample was converted from.
    ///
    /// # Errors
    ///
    /// A failing read is the steady-state `SensorUnavailable` condition; the
    /// caller decides whether to skip the iteration or halt.
    fn read_sample(&mut self, frame: &mut RawFrame) -> Result<Sample, ImuError>;

    /// Whether recent reads have been succeeding
    fn is_healthy(&self) -> bool;
}
