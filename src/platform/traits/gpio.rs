//! GPIO interface trait

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Output mode (push-pull)
    OutputPushPull,
    /// Output mode (open-drain)
    OutputOpenDrain,
}

impl GpioMode {
    /// Whether the pin can be driven in this mode
    pub const fn is_output(self) -> bool {
        matches!(self, GpioMode::OutputPushPull | GpioMode::OutputOpenDrain)
    }
}

/// GPIO interface trait
///
/// Indicator channels are plain output pins; the logical-to-electrical
/// level mapping (active-high or active-low) is decided by the driver that
/// owns the pin, not here.
pub trait GpioInterface {
    /// Drive the pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Read the pin level, `true` if high
    fn read(&self) -> bool;

    /// Set GPIO pin mode
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Drive the pin to `high`
    fn set_level(&mut self, high: bool) -> Result<()> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}
