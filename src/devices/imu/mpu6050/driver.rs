//! MPU-6050 I2C Driver Implementation
//!
//! Initialization is five register writes in a fixed order; any failure is
//! fatal and reported with the register that failed. Steady-state reads are
//! a single 14-byte burst into a caller-owned frame.

use ezto_core::imu::{RawFrame, Sample, SampleScale};

use super::config::Mpu6050Config;
use super::registers;
use crate::devices::traits::{ImuError, MotionSensor};
use crate::platform::{traits::I2cInterface, PlatformError};

/// Maximum consecutive errors before marking sensor unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// MPU-6050 I2C Driver
pub struct Mpu6050<I: I2cInterface> {
    /// I2C bus handle
    i2c: I,

    /// Driver configuration
    config: Mpu6050Config,

    /// Raw-count scale factors derived from the configured ranges
    scale: SampleScale,

    /// Health status
    healthy: bool,

    /// Consecutive error count
    error_count: u32,

    /// Initialization complete flag
    initialized: bool,
}

impl<I: I2cInterface> Mpu6050<I> {
    /// Create an uninitialized driver; call [`Mpu6050::init`] before reading
    pub fn new(i2c: I, config: Mpu6050Config) -> Self {
        Self {
            i2c,
            scale: config.scale(),
            config,
            healthy: false,
            error_count: 0,
            initialized: false,
        }
    }

    /// Configure the sensor
    ///
    /// Writes, in order: wake (PWR_MGMT_1), sample-rate divider, DLPF,
    /// gyro range, accel range. Stops at the first failing write.
    pub fn init(&mut self) -> Result<(), ImuError> {
        let sequence = [
            (registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE),
            (registers::SMPLRT_DIV, self.config.sample_rate_div),
            (registers::CONFIG, self.config.dlpf.register_value()),
            (registers::GYRO_CONFIG, self.config.gyro_range.register_value()),
            (registers::ACCEL_CONFIG, self.config.accel_range.register_value()),
        ];

        for (reg, value) in sequence {
            if let Err(e) = self.write_register(reg, value) {
                crate::log_error!("MPU-6050 write {:#x} <- {:#x} failed: {:?}", reg, value, e);
                return Err(ImuError::InitFailed(reg));
            }
        }

        self.initialized = true;
        self.healthy = true;
        self.error_count = 0;
        crate::log_info!(
            "MPU-6050 initialized at {:#x} (div={}, dlpf={})",
            self.config.i2c_address,
            self.config.sample_rate_div,
            self.config.dlpf.register_value()
        );

        Ok(())
    }

    /// Burst-read the 14 measurement bytes into `frame`
    pub fn read_frame(&mut self, frame: &mut RawFrame) -> Result<(), ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }

        let result = self.i2c.write_read(
            self.config.i2c_address,
            &[registers::ACCEL_XOUT_H],
            frame.as_mut_bytes(),
        );
        match result {
            Ok(()) => {
                self.error_count = 0;
                self.healthy = true;
                Ok(())
            }
            Err(e) => {
                self.record_error();
                Err(bus_error(e))
            }
        }
    }

    /// Scale factors in use
    pub fn scale(&self) -> SampleScale {
        self.scale
    }

    /// Driver configuration
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &I {
        &self.i2c
    }

    /// Mutably borrow the underlying bus
    pub fn bus_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Write a register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ImuError> {
        self.i2c
            .write(self.config.i2c_address, &[reg, value])
            .map_err(|e| {
                self.record_error();
                bus_error(e)
            })?;
        self.error_count = 0;
        Ok(())
    }

    fn record_error(&mut self) {
        self.error_count = self.error_count.saturating_add(1);
        if self.error_count >= MAX_CONSECUTIVE_ERRORS {
            self.healthy = false;
        }
    }
}

impl<I: I2cInterface> MotionSensor for Mpu6050<I> {
    fn read_sample(&mut self, frame: &mut RawFrame) -> Result<Sample, ImuError> {
        self.read_frame(frame)?;
        Ok(Sample::from_frame(frame, &self.scale))
    }

    fn is_healthy(&self) -> bool {
        self.healthy
    }
}

fn bus_error(e: PlatformError) -> ImuError {
    match e {
        PlatformError::I2c(cause) => ImuError::Bus(cause),
        _ => ImuError::Bus(crate::platform::I2cError::BusError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::imu::mpu6050::{AccelRange, GyroRange};
    use crate::platform::error::I2cError;
    use crate::platform::mock::{I2cTransaction, MockI2c};

    fn driver() -> Mpu6050<MockI2c> {
        Mpu6050::new(MockI2c::new(), Mpu6050Config::default())
    }

    fn write(data: [u8; 2]) -> I2cTransaction {
        I2cTransaction::Write {
            addr: 0x68,
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_init_sequence_order() {
        let mut imu = driver();
        imu.init().unwrap();

        assert_eq!(
            imu.bus().transactions(),
            &[
                write([0x6B, 0x00]),
                write([0x19, 0x04]),
                write([0x1A, 0x01]),
                write([0x1B, 0x00]),
                write([0x1C, 0x00]),
            ]
        );
        assert!(imu.is_healthy());
    }

    #[test]
    fn test_init_uses_configured_ranges() {
        let config = Mpu6050Config {
            gyro_range: GyroRange::Dps500,
            accel_range: AccelRange::G4,
            ..Mpu6050Config::alternate_address()
        };
        let mut imu = Mpu6050::new(MockI2c::new(), config);
        imu.init().unwrap();

        let tx = imu.bus().transactions();
        assert_eq!(
            tx[3],
            I2cTransaction::Write {
                addr: 0x69,
                data: vec![0x1B, 0x08]
            }
        );
        assert_eq!(
            tx[4],
            I2cTransaction::Write {
                addr: 0x69,
                data: vec![0x1C, 0x08]
            }
        );
    }

    #[test]
    fn test_init_failure_is_fatal_and_stops_sequence() {
        let mut imu = driver();
        imu.bus_mut().fail_writes_to(0x1A);

        assert_eq!(imu.init(), Err(ImuError::InitFailed(0x1A)));
        // Wake, divider, then the failing DLPF write; ranges never written
        assert_eq!(imu.bus().transactions().len(), 3);

        let mut frame = RawFrame::new();
        assert_eq!(
            imu.read_sample(&mut frame),
            Err(ImuError::NotInitialized)
        );
    }

    #[test]
    fn test_read_sample_burst() {
        let mut imu = driver();
        imu.init().unwrap();
        imu.bus_mut().clear_transactions();

        let raw = RawFrame::encode([16384, -16384, 8192], 0, [131, -262, 0]);
        imu.bus_mut().queue_read(raw.as_bytes());

        let mut frame = RawFrame::new();
        let sample = imu.read_sample(&mut frame).unwrap();

        assert_eq!(
            imu.bus().transactions(),
            &[I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: vec![0x3B],
                read_len: 14
            }]
        );
        assert_eq!(frame, raw);
        assert_eq!(sample.accel.x, 1.0);
        assert_eq!(sample.accel.y, -1.0);
        assert_eq!(sample.accel.z, 0.5);
        assert_eq!(sample.gyro.x, 1.0);
        assert_eq!(sample.gyro.y, -2.0);
        assert_eq!(sample.temperature_c, 36.53);
    }

    #[test]
    fn test_read_failure_reports_bus_error() {
        let mut imu = driver();
        imu.init().unwrap();
        imu.bus_mut().fail_next_reads(MAX_CONSECUTIVE_ERRORS);

        let mut frame = RawFrame::new();
        for _ in 0..MAX_CONSECUTIVE_ERRORS {
            assert_eq!(
                imu.read_sample(&mut frame),
                Err(ImuError::Bus(I2cError::Nack))
            );
        }
        assert!(!imu.is_healthy());

        // Recovers on the next good read
        assert!(imu.read_sample(&mut frame).is_ok());
        assert!(imu.is_healthy());
    }
}
