//! Sampling loop scheduler
//!
//! The node runs a single cooperative task: the fixed-cadence loop in
//! [`runner`]. Configuration and statistics types live in `ezto_core` so
//! they can be tested without any platform code.

pub mod runner;
pub mod shutdown;

pub use ezto_core::scheduler::*;
pub use runner::{Iteration, LoopExit, LoopScheduler, NodeContext};
pub use shutdown::ShutdownSignal;
