//! Host implementations of the node's platform traits.
//!
//! Every peripheral the node expects is provided here: a simulated
//! MPU-6050 on the I2C bus, LED pins that echo to the console, a wireless
//! link stand-in, host memory probes and tokio-backed timing.

pub mod gpio;
pub mod mpu6050;
pub mod network;
pub mod system;
pub mod timer;

pub use gpio::SimLed;
pub use mpu6050::SimMpu6050;
pub use network::SimNetwork;
pub use system::HostSystem;
pub use timer::{SystemWallClock, TokioTimer};
