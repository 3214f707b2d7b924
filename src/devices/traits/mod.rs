//! Device trait definitions
//!
//! Drivers implement these so the sampling loop can run against real
//! hardware, simulated buses or scripted test doubles alike.

pub mod imu;
pub mod indicator;

pub use imu::{ImuError, MotionSensor};
pub use indicator::{Indicator, IndicatorError};
