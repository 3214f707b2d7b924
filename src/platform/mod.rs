//! Platform abstraction layer
//!
//! Hardware access goes through the traits in [`traits`]. Board support
//! packages implement them; [`mock`] implements them for host tests.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, I2cError, NetworkError, PlatformError, Result};
pub use traits::{
    GpioInterface, GpioMode, I2cInterface, NetworkInterface, SystemInterface, TimerInterface,
};
