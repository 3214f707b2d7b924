//! I2C interface trait
//!
//! Register-addressed sensors (the MPU-6050 among them) are driven through
//! two primitives: a plain write of `[register, value]` and a combined
//! write-read that sets the register pointer and bursts data back.

use crate::platform::Result;

/// I2C interface trait
///
/// # Safety Invariants
///
/// - Only one owner per I2C bus instance
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait I2cInterface {
    /// Write data to I2C device
    ///
    /// START - ADDR(W) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, bus error or timeout.
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Write then read with a repeated START
    ///
    /// START - ADDR(W) - WRITE_DATA - REPEATED_START - ADDR(R) - READ_DATA - STOP
    ///
    /// `read_buffer` is filled completely on success.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, bus error or timeout.
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;
}
