//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod i2c;
pub mod network;
pub mod system;
pub mod timer;

// Re-export trait interfaces
pub use gpio::{GpioInterface, GpioMode};
pub use i2c::I2cInterface;
pub use network::NetworkInterface;
pub use system::SystemInterface;
pub use timer::TimerInterface;
