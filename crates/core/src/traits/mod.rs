//! Core traits for platform-agnostic node functionality.
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live in the device and sim crates

pub mod time;

pub use time::{MockTime, MockWallClock, TimeSource, WallClock};
