//! MPU-6050 6-axis IMU driver
//!
//! Register-level driver over [`I2cInterface`](crate::platform::traits::I2cInterface).

pub mod config;
pub mod driver;
pub mod registers;

pub use config::{AccelRange, DlpfConfig, GyroRange, Mpu6050Config};
pub use driver::Mpu6050;
