//! Mock platform implementation for testing
//!
//! Host-side implementations of every platform trait, with fault injection
//! where the node has a failure path to exercise.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use ezto_node::platform::mock::MockI2c;
//! use ezto_node::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::new();
//! i2c.write(0x68, &[0x6B, 0x00]).unwrap();
//! assert_eq!(i2c.transactions().len(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;
mod network;
mod system;
mod timer;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use network::MockNetwork;
pub use system::MockSystem;
pub use timer::MockTimer;
