//! Device drivers
//!
//! Drivers are written against the platform abstraction traits and never
//! touch a HAL directly.
//!
//! ## Modules
//!
//! - `imu`: MPU-6050 register-level driver
//! - `indicator`: RGB status LED on three GPIO outputs
//! - `traits`: Device trait definitions (MotionSensor, Indicator)

pub mod imu;
pub mod indicator;
pub mod traits;
