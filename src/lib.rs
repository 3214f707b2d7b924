#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! ezto_node - Wearable exercise-form tracking node
//!
//! Samples an MPU-6050 over I2C, classifies each sample into a form status
//! (RED/YELLOW/GREEN), mirrors it on an RGB LED and uploads one telemetry
//! document per iteration to a remote document store.

// Platform abstraction layer (I2C, GPIO, timer, network, system queries)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core systems (logging, sampling loop, startup)
pub mod core;

// Static node configuration
pub mod parameters;

// Network association and telemetry publishing
pub mod communication;

// Resource metrics
pub mod subsystems;
