//! Persistence adapter: JSON snapshots under fixed keys, with fallback on every failure path.
//!
//! Neither `load` nor `save` returns an error. Missing keys, a detached store, and
//! corrupt payloads all degrade to the caller's fallback; failed writes are logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::kv::KeyValueStore;

/// Key for the assignment collection snapshot.
pub const ASSIGNMENTS_STORAGE_KEY: &str = "jacc-assignments";

/// Key for the reminder collection snapshot.
pub const REMINDERS_STORAGE_KEY: &str = "jacc-reminders";

#[derive(Clone)]
pub struct Persistence {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store: Some(store) }
    }

    /// No backing store: loads return the fallback, saves are no-ops.
    pub fn detached() -> Self {
        Self { store: None }
    }

    pub fn is_attached(&self) -> bool {
        self.store.is_some()
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(store) = self.store.as_ref() else {
            return fallback;
        };
        let bytes = match store.get(key) {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => {
                debug!(key, "nothing stored; using fallback");
                return fallback;
            }
            Err(e) => {
                error!(key, error = %e, "error loading from store");
                return fallback;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored value is corrupt; using fallback");
                fallback
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(key, error = %e, "error serializing value");
                return;
            }
        };
        if let Err(e) = store.put(key, &bytes) {
            error!(key, error = %e, "error saving to store");
        }
    }
}
