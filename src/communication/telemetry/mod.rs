//! Telemetry publishing
//!
//! Each loop iteration produces one [`TelemetrySnapshot`] which is upserted
//! into the document store under its time-and-device key. Publishing is
//! best effort: one attempt, bounded by a timeout, never retried.
//!
//! [`TelemetrySnapshot`]: ezto_core::telemetry::TelemetrySnapshot

pub mod publisher;
pub mod store;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use publisher::{PublishOutcome, TelemetryPublisher};
pub use store::{DocumentStore, StoreError};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockDocumentStore;
