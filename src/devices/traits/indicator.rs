//! Status indicator trait

use core::fmt;

use ezto_core::indicator::IndicatorState;

use crate::platform::error::GpioError;

/// Indicator actuation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorError {
    /// Channel that failed (0 = red, 1 = green, 2 = blue)
    pub channel: u8,
    pub cause: GpioError,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indicator channel {} failed: {:?}", self.channel, self.cause)
    }
}

/// Three-channel discrete status output
///
/// Failures are reported to the caller, which treats them as non-fatal.
pub trait Indicator {
    /// Prepare the outputs and switch every channel off
    fn init(&mut self) -> Result<(), IndicatorError> {
        self.set_channels(false, false, false)
    }

    /// Drive the three channels
    fn set_channels(&mut self, r: bool, g: bool, b: bool) -> Result<(), IndicatorError>;

    /// Drive the channels to `state`
    fn show(&mut self, state: IndicatorState) -> Result<(), IndicatorError> {
        self.set_channels(state.r, state.g, state.b)
    }
}
