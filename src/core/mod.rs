//! Core node functionality
//!
//! Logging macros, the sampling loop scheduler and the startup sequence
//! that brings the node from power-on to its first iteration.

pub mod logging;
pub mod scheduler;
pub mod startup;
