//! Telemetry model
//!
//! - [`snapshot`]: Per-iteration snapshot and resource metrics
//! - [`document`]: Serializable document body sent to the store
//! - [`key`]: Second-resolution document key

pub mod document;
pub mod key;
pub mod snapshot;

pub use document::{AxesDoc, Readings, TelemetryDocument, TELEMETRY_COLLECTION};
pub use key::{
    document_key, format_timestamp, DocumentKey, KeyError, Timestamp, DOCUMENT_KEY_CAPACITY,
    MAX_DEVICE_ID_LEN, TIMESTAMP_LEN,
};
pub use snapshot::{NodeIdentity, ResourceMetrics, TelemetrySnapshot};
