//! Persistence of the committed shape list to a string-keyed store.
//!
//! DESIGN
//! ======
//! The scene never performs I/O. The host saves `Scene::records()` through a
//! [`ShapeStore`] after each commit and loads it once at startup. Loading
//! fails closed: a missing key, an unreachable backend, or malformed JSON all
//! yield an empty list so the editor always starts usable.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::shape::ShapeRecord;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("shape list serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// BACKENDS
// =============================================================================

/// A string-keyed string store (browser local storage, a map, a file...).
pub trait KeyValueStore {
    /// Read the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `Backend` if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Backend` if the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// SHAPE STORE
// =============================================================================

/// Saves and loads shape records as a JSON array under one key.
#[derive(Debug)]
pub struct ShapeStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> ShapeStore<B> {
    #[must_use]
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load persisted records. Never fails; problems are logged and an empty
    /// list is returned.
    #[must_use]
    pub fn load(&self) -> Vec<ShapeRecord> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "shape store unreadable; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ShapeRecord>>(&raw) {
            Ok(records) => {
                tracing::debug!(key = %self.key, count = records.len(), "loaded shapes");
                records
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "malformed shape list; starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the persisted list with `records`.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails or `Backend` if the write fails.
    pub fn save(&mut self, records: &[ShapeRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = records.len(), "saved shapes");
        Ok(())
    }
}

// =============================================================================
// BROWSER LOCAL STORAGE
// =============================================================================

#[cfg(feature = "web")]
pub use local::LocalStorage;

#[cfg(feature = "web")]
mod local {
    use super::{KeyValueStore, StoreError};

    /// `window.localStorage` backend.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        /// Open the window's local storage.
        ///
        /// # Errors
        ///
        /// Returns `Backend` when there is no window or storage is disabled.
        pub fn open() -> Result<Self, StoreError> {
            let window = web_sys::window().ok_or_else(|| StoreError::Backend("no window".into()))?;
            let storage = window
                .local_storage()
                .map_err(|e| StoreError::Backend(format!("{e:?}")))?
                .ok_or_else(|| StoreError::Backend("local storage unavailable".into()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage
                .get_item(key)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
    }
}
