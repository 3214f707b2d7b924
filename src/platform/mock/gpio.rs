//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin level, mode and write count. A fault can be injected so that
/// every drive attempt fails until cleared.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    faulted: bool,
    writes: u32,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode, driven low
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            faulted: false,
            writes: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            mode: GpioMode::Input,
            ..Self::new_output()
        }
    }

    /// Make subsequent drive attempts fail (or succeed again)
    pub fn set_fault(&mut self, faulted: bool) {
        self.faulted = faulted;
    }

    /// Current pin mode
    pub fn mode(&self) -> GpioMode {
        self.mode
    }

    /// Number of successful drive operations
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn drive(&mut self, level: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.faulted {
            return Err(PlatformError::Gpio(GpioError::WriteFailed));
        }
        self.state = level;
        self.writes += 1;
        Ok(())
    }
}

impl GpioInterface for MockGpio {
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
