//! In-memory document store for testing

use std::collections::BTreeMap;
use std::string::{String, ToString};

use ezto_core::telemetry::TelemetryDocument;
use serde_json::Value;

use super::store::{DocumentStore, StoreError};

/// In-memory document store
///
/// Documents are kept as JSON values keyed by `collection/key`; an upsert
/// replaces any existing document at the same path. Failures can be queued
/// and the store can be made to hang so publish timeouts can be exercised.
#[derive(Debug, Default)]
pub struct MockDocumentStore {
    documents: BTreeMap<String, Value>,
    attempts: u32,
    pending_failures: u32,
    failure: Option<StoreError>,
    hanging: bool,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` upserts with `error`
    pub fn fail_next(&mut self, count: u32, error: StoreError) {
        self.pending_failures = count;
        self.failure = Some(error);
    }

    /// Never complete upserts while set
    pub fn set_hanging(&mut self, hanging: bool) {
        self.hanging = hanging;
    }

    /// Upserts attempted so far, including failed and abandoned ones
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Stored documents keyed by `collection/key`
    pub fn documents(&self) -> &BTreeMap<String, Value> {
        &self.documents
    }

    pub fn get(&self, collection: &str, key: &str) -> Option<&Value> {
        self.documents.get(&path(collection, key))
    }
}

fn path(collection: &str, key: &str) -> String {
    let mut path = collection.to_string();
    path.push('/');
    path.push_str(key);
    path
}

impl DocumentStore for MockDocumentStore {
    async fn upsert(
        &mut self,
        collection: &str,
        key: &str,
        document: &TelemetryDocument<'_>,
    ) -> Result<(), StoreError> {
        self.attempts += 1;

        if self.hanging {
            core::future::pending::<()>().await;
        }

        if self.pending_failures > 0 {
            self.pending_failures -= 1;
            return Err(self.failure.unwrap_or(StoreError::Transport));
        }

        let value = serde_json::to_value(document).map_err(|_| StoreError::Encoding)?;
        self.documents.insert(path(collection, key), value);
        Ok(())
    }
}
