//! Simulated MPU-6050 register bus.
//!
//! Answers the same transactions as the real part: register writes,
//! register reads and the 14-byte measurement burst from `ACCEL_XOUT_H`.
//! Measurements come from a [`MotionScript`]. The part powers up asleep and
//! returns zeroed measurements until `PWR_MGMT_1` clears the sleep bit.
//! `AD0` selects the bus address (0x68 low, 0x69 high); `WHO_AM_I` reads
//! 0x68 either way.

use ezto_node::platform::{I2cError, I2cInterface, PlatformError, Result};

use crate::motion::MotionScript;

const ADDRESS: u8 = 0x68;
const ADDRESS_AD0_HIGH: u8 = 0x69;
const ACCEL_XOUT_H: u8 = 0x3B;
const PWR_MGMT_1: u8 = 0x6B;
const WHO_AM_I: u8 = 0x75;
const SLEEP_BIT: u8 = 0x40;
const BURST_LEN: usize = 14;

/// Simulated MPU-6050.
#[derive(Debug)]
pub struct SimMpu6050 {
    address: u8,
    registers: [u8; 128],
    script: MotionScript,
    connected: bool,
    bursts: u64,
}

impl SimMpu6050 {
    pub fn new(script: MotionScript) -> Self {
        let mut registers = [0u8; 128];
        registers[PWR_MGMT_1 as usize] = SLEEP_BIT;
        registers[WHO_AM_I as usize] = ADDRESS;
        Self {
            address: ADDRESS,
            registers,
            script,
            connected: true,
            bursts: 0,
        }
    }

    /// Strap `AD0` high or low.
    pub fn with_ad0(mut self, high: bool) -> Self {
        self.address = if high { ADDRESS_AD0_HIGH } else { ADDRESS };
        self
    }

    /// Address the part answers on.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current value of a register.
    pub fn register(&self, reg: u8) -> u8 {
        self.registers[usize::from(reg & 0x7F)]
    }

    pub fn is_awake(&self) -> bool {
        self.register(PWR_MGMT_1) & SLEEP_BIT == 0
    }

    /// Unplug or replug the sensor; while unplugged every transaction NACKs.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Measurement bursts served so far.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    fn check_address(&self, addr: u8) -> Result<()> {
        if !self.connected || addr != self.address {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok(())
    }
}

impl Default for SimMpu6050 {
    fn default() -> Self {
        Self::new(MotionScript::default())
    }
}

impl I2cInterface for SimMpu6050 {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.check_address(addr)?;
        let (&reg, values) = data
            .split_first()
            .ok_or(PlatformError::I2c(I2cError::BusError))?;

        // Sequential writes auto-increment the register pointer
        for (offset, &value) in values.iter().enumerate() {
            let index = usize::from(reg) + offset;
            let slot = self
                .registers
                .get_mut(index)
                .ok_or(PlatformError::I2c(I2cError::Nack))?;
            *slot = value;
        }
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.check_address(addr)?;
        let &reg = write_data
            .first()
            .ok_or(PlatformError::I2c(I2cError::BusError))?;

        if reg == ACCEL_XOUT_H && read_buffer.len() <= BURST_LEN {
            let frame = if self.is_awake() {
                self.bursts += 1;
                self.script.next_frame()
            } else {
                Default::default()
            };
            read_buffer.copy_from_slice(&frame.as_bytes()[..read_buffer.len()]);
            return Ok(());
        }

        for (offset, byte) in read_buffer.iter_mut().enumerate() {
            *byte = self
                .registers
                .get(usize::from(reg) + offset)
                .copied()
                .ok_or(PlatformError::I2c(I2cError::Nack))?;
        }
        Ok(())
    }
}
