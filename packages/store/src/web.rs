//! # Browser `localStorage` backend
//!
//! [`WebStorage`] is the [`KeyValueStorage`] used on the web platform. It wraps
//! the window's `localStorage`, which is synchronous and scoped to the origin,
//! so values survive page reloads within the same browser profile.
//!
//! Opening fails when there is no window (e.g. inside a worker) or when the
//! browser blocks storage access; [`crate::default_storage`] then falls back to
//! [`crate::NoopStorage`].

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Web(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Web(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Web(format!("{e:?}")))
    }
}
