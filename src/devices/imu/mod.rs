//! IMU Drivers
//!
//! ## Usage
//!
//! ```ignore
//! use ezto_core::imu::RawFrame;
//! use ezto_node::devices::imu::{Mpu6050, Mpu6050Config};
//! use ezto_node::devices::traits::MotionSensor;
//! use ezto_node::platform::mock::MockI2c;
//!
//! let mut imu = Mpu6050::new(MockI2c::new(), Mpu6050Config::default());
//! imu.init().unwrap();
//!
//! let mut frame = RawFrame::new();
//! let sample = imu.read_sample(&mut frame).unwrap();
//! assert_eq!(sample.accel.x, 0.0);
//! ```

pub mod mpu6050;

pub use mpu6050::{AccelRange, DlpfConfig, GyroRange, Mpu6050, Mpu6050Config};
