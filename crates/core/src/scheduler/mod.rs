//! Loop scheduling types without any async runtime dependencies
//!
//! The loop itself lives in the node crate; this module only holds the
//! cadence configuration and the statistics it accumulates.
//!
//! # Example
//!
//! ```rust
//! use ezto_core::scheduler::{LoopConfig, LoopStats};
//!
//! let config = LoopConfig::default();
//! let mut stats = LoopStats::default();
//! stats.record_iteration(12_000, config.budget_us());
//! assert_eq!(stats.iterations, 1);
//! ```

pub mod types;

pub use types::*;
