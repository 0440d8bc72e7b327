//! # Durable key-value storage
//!
//! [`KeyValueStorage`] is the string-keyed, string-valued store the state
//! managers mirror themselves into. It has the same shape as the browser's
//! `localStorage`, and every call is synchronous.
//!
//! | Backend | Where | Persistent |
//! |---------|-------|------------|
//! | `WebStorage` | browser (`web` feature) | yes |
//! | [`FileStorage`](crate::FileStorage) | desktop / mobile | yes |
//! | [`MemoryStorage`](crate::MemoryStorage) | tests, fallback | process lifetime |
//! | [`NoopStorage`] | server rendering | no |
//!
//! [`default_storage`] picks the platform backend once at startup, so nothing
//! downstream branches on the environment.

use std::rc::Rc;

use crate::config::StorageConfig;
use crate::error::StorageError;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Whether writes survive a restart of the application.
    fn is_persistent(&self) -> bool {
        true
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Storage for contexts with no client storage, such as server rendering.
/// Reads find nothing and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStorage;

impl KeyValueStorage for NoopStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

/// Create the platform-appropriate storage backend.
///
/// - **Web**: `localStorage`, or [`NoopStorage`] if the browser denies access
/// - **Native**: [`FileStorage`](crate::FileStorage) under the configured or
///   platform data directory, or [`MemoryStorage`](crate::MemoryStorage) when
///   no data directory exists
pub fn default_storage(config: &StorageConfig) -> Rc<dyn KeyValueStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let _ = config;
        match crate::WebStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                tracing::warn!("local storage unavailable, state will not persist: {e}");
                Rc::new(NoopStorage)
            }
        }
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        match config.resolve_dir() {
            Some(dir) => {
                tracing::debug!("using file storage at {}", dir.display());
                Rc::new(crate::FileStorage::new(dir))
            }
            None => {
                tracing::warn!("no data directory, state will only live in memory");
                Rc::new(crate::MemoryStorage::new())
            }
        }
    }
}

/// Read a record, treating missing, empty and unreadable alike.
pub(crate) fn load_text(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(Some(text)) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("failed to read {key:?} from storage: {e}");
            None
        }
    }
}

pub(crate) fn store_text(storage: &dyn KeyValueStorage, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        tracing::warn!("failed to write {key:?} to storage: {e}");
    }
}

/// Backend whose every call fails, for exercising the swallow-and-log paths.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl KeyValueStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("read refused".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("write refused".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("remove refused".to_string()))
    }
}
