// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Device storage for tests, with a switch that makes every write fail like a full quota.

use crate::core::ports::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
    is_full: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_full(&self) {
        self.is_full.fetch_xor(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.is_full.load(Ordering::SeqCst) {
            return Err(StorageError::Write("Key value store quota exceeded".to_string()));
        }
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
