//! ezto_core - Pure no_std logic for the ezto form-tracking node
//!
//! This crate contains the platform-agnostic algorithms and types of the
//! sampling/classification/telemetry loop. Everything here can be tested on
//! host without hardware, feature flags or an async runtime.
//!
//! # Design Principles
//!
//! - **Zero feature flags**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: std is only linked for host tests
//! - **Trait abstractions**: Clocks injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Monotonic and wall-clock time abstractions
//! - [`imu`]: Raw register frame decoding and physical-unit samples
//! - [`classifier`]: Exercise variants, thresholds and form classification
//! - [`indicator`]: Indicator channel state derived from a classification
//! - [`telemetry`]: Snapshot, document model and document key
//! - [`scheduler`]: Loop statistics

#![cfg_attr(not(test), no_std)]

pub mod classifier;
pub mod imu;
pub mod indicator;
pub mod scheduler;
pub mod telemetry;
pub mod traits;
