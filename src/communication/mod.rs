//! Communication
//!
//! - [`network`]: Wireless association with fixed-interval retry
//! - [`telemetry`]: Document store abstraction and best-effort publisher

pub mod network;
pub mod telemetry;
