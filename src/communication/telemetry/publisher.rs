//! Timeout-bounded telemetry publisher

use embassy_futures::select::{select, Either};
use ezto_core::telemetry::{TelemetrySnapshot, TELEMETRY_COLLECTION};

use super::store::{DocumentStore, StoreError};
use crate::platform::traits::TimerInterface;

/// Result of one publish attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PublishOutcome {
    /// Store acknowledged the upsert
    Delivered,
    /// Store or encoding error
    Failed(StoreError),
    /// No answer within the publish timeout
    TimedOut,
}

/// Publishes snapshots to a [`DocumentStore`]
///
/// One upsert per snapshot. A slow store is abandoned once the timeout
/// elapses so the loop cadence holds; the abandoned request is dropped.
pub struct TelemetryPublisher<S: DocumentStore> {
    store: S,
    collection: &'static str,
    timeout_ms: u32,
}

impl<S: DocumentStore> TelemetryPublisher<S> {
    /// Publisher writing to [`TELEMETRY_COLLECTION`]
    pub fn new(store: S, timeout_ms: u32) -> Self {
        Self::with_collection(store, TELEMETRY_COLLECTION, timeout_ms)
    }

    pub fn with_collection(store: S, collection: &'static str, timeout_ms: u32) -> Self {
        Self {
            store,
            collection,
            timeout_ms,
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Upsert one snapshot, giving up after the timeout
    pub async fn publish<T: TimerInterface>(
        &mut self,
        snapshot: &TelemetrySnapshot<'_>,
        timer: &mut T,
    ) -> PublishOutcome {
        let key = match snapshot.document_key() {
            Ok(key) => key,
            Err(_) => return PublishOutcome::Failed(StoreError::InvalidKey),
        };
        let document = snapshot.to_document();

        let upsert = self.store.upsert(self.collection, key.as_str(), &document);
        match select(upsert, timer.delay_ms(self.timeout_ms)).await {
            Either::First(Ok(())) => PublishOutcome::Delivered,
            Either::First(Err(e)) => PublishOutcome::Failed(e),
            Either::Second(()) => PublishOutcome::TimedOut,
        }
    }
}
