// Local persistence of swipe history.
//
// Purpose
// - Append-only log of swipe records kept in device storage as one JSON array under a fixed key.
//
// Responsibilities
// - A missing or corrupt value reads as an empty log. Malformed entries are skipped.
// - append rewrites the whole array. Duplicates are kept.

use crate::core::ports::{KeyValueStore, StorageError};
use crate::core::swipe::{SwipeAction, SwipeRecord, SwipeStats};
use serde_json::Value;
use std::sync::Arc;

pub const SWIPE_LOG_KEY: &str = "kampuspot_swipes_v1";

pub struct SwipeLog<S: KeyValueStore> {
    store: Arc<S>,
    key: String,
}

impl<S: KeyValueStore> SwipeLog<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, SWIPE_LOG_KEY)
    }

    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn read_all(&self) -> Vec<SwipeRecord> {
        let Some(raw) = self.store.get_item(&self.key) else {
            return Vec::new();
        };
        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "corrupt swipe log, reading it as empty"
                );
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<SwipeRecord>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(
                        key = %self.key,
                        error = %err,
                        "skipping malformed swipe record"
                    );
                    None
                }
            })
            .collect()
    }

    pub fn append(&self, record: SwipeRecord) -> Result<(), StorageError> {
        let mut records = self.read_all();
        records.push(record);
        let raw = serde_json::to_string(&records)
            .map_err(|err| StorageError::Write(err.to_string()))?;
        self.store.set_item(&self.key, &raw)
    }

    /// Appends a record stamped with the current client time.
    pub fn record(&self, spot_id: &str, action: SwipeAction) -> Result<SwipeRecord, StorageError> {
        let record = SwipeRecord::new(spot_id, action, chrono::Utc::now().timestamp_millis());
        self.append(record.clone())?;
        Ok(record)
    }

    pub fn stats(&self) -> SwipeStats {
        SwipeStats::tally(&self.read_all())
    }
}
