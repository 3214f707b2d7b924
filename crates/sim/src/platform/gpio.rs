//! Simulated LED pin.
//!
//! Tracks level and mode like a real output and prints a line to the
//! console whenever the level changes.

use ezto_node::platform::{GpioError, GpioInterface, GpioMode, PlatformError, Result};

/// Output pin driving one LED channel.
#[derive(Debug)]
pub struct SimLed {
    label: &'static str,
    pin: u8,
    state: bool,
    mode: GpioMode,
    echo: bool,
}

impl SimLed {
    /// Output pin, initially low, echoing level changes to stdout.
    pub fn new(label: &'static str, pin: u8) -> Self {
        Self {
            label,
            pin,
            state: false,
            mode: GpioMode::OutputPushPull,
            echo: true,
        }
    }

    /// Same as [`SimLed::new`] but silent.
    pub fn quiet(label: &'static str, pin: u8) -> Self {
        Self {
            echo: false,
            ..Self::new(label, pin)
        }
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    fn drive(&mut self, level: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.echo && level != self.state {
            println!(
                "[LED] {} (GP{}) {}",
                self.label,
                self.pin,
                if level { "on" } else { "off" }
            );
        }
        self.state = level;
        Ok(())
    }
}

impl GpioInterface for SimLed {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}
