//! Document store abstraction

use core::fmt;

use ezto_core::telemetry::TelemetryDocument;

/// Store operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Connection failed or dropped before a response arrived
    Transport,
    /// Store answered with a non-success status
    Rejected(u16),
    /// Document could not be serialized
    Encoding,
    /// Document key could not be derived
    InvalidKey,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Transport => write!(f, "store transport error"),
            StoreError::Rejected(status) => write!(f, "store rejected write (status {})", status),
            StoreError::Encoding => write!(f, "document encoding failed"),
            StoreError::InvalidKey => write!(f, "invalid document key"),
        }
    }
}

/// Keyed document store with upsert semantics
///
/// `upsert` creates the document at `collection/key` or replaces it entirely.
/// Implementations make exactly one attempt; retrying is the caller's call
/// and the sampling loop never does.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn upsert(
        &mut self,
        collection: &str,
        key: &str,
        document: &TelemetryDocument<'_>,
    ) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &mut S {
    async fn upsert(
        &mut self,
        collection: &str,
        key: &str,
        document: &TelemetryDocument<'_>,
    ) -> Result<(), StoreError> {
        (**self).upsert(collection, key, document).await
    }
}
