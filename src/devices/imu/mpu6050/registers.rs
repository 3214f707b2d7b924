//! MPU-6050 Register Definitions
//!
//! Only the registers the driver touches. Based on the MPU-6000/MPU-6050
//! Register Map (RM-MPU-6000A-00 v4.2).

/// I2C address when AD0 pin is low
pub const MPU6050_ADDR: u8 = 0x68;

/// I2C address when AD0 pin is high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

/// Sample rate divider: SAMPLE_RATE = Gyro_Output_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;

/// Configuration register (DLPF, FSYNC)
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (full-scale range)
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (full-scale range)
pub const ACCEL_CONFIG: u8 = 0x1C;

/// First byte of the 14-byte accel/temp/gyro burst
pub const ACCEL_XOUT_H: u8 = 0x3B;

/// Power management 1
pub const PWR_MGMT_1: u8 = 0x6B;

/// PWR_MGMT_1: sleep cleared, internal 8 MHz oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

/// GYRO_CONFIG FS_SEL values
pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

/// ACCEL_CONFIG AFS_SEL values
pub const ACCEL_FS_SEL_2G: u8 = 0x00;
pub const ACCEL_FS_SEL_4G: u8 = 0x08;
pub const ACCEL_FS_SEL_8G: u8 = 0x10;
pub const ACCEL_FS_SEL_16G: u8 = 0x18;

/// Gyroscope sensitivity (LSB per °/s)
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;
pub const GYRO_SENSITIVITY_500DPS: f32 = 65.5;
pub const GYRO_SENSITIVITY_1000DPS: f32 = 32.8;
pub const GYRO_SENSITIVITY_2000DPS: f32 = 16.4;

/// Accelerometer sensitivity (LSB per g)
pub const ACCEL_SENSITIVITY_2G: f32 = 16384.0;
pub const ACCEL_SENSITIVITY_4G: f32 = 8192.0;
pub const ACCEL_SENSITIVITY_8G: f32 = 4096.0;
pub const ACCEL_SENSITIVITY_16G: f32 = 2048.0;
