use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

/// In-memory storage for testing and native fallback.
///
/// Clones share the same map, so a second manager built on a clone sees what
/// the first one wrote, the same way a reloaded page sees `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with the given records.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    /// Number of stored records. Still answers after a panic poisoned the lock;
    /// the trait methods return [`StorageError::Poisoned`] instead.
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("language").unwrap(), None);

        storage.set_item("language", "en").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));

        storage.set_item("language", "km").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("km"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("language").unwrap();
        assert_eq!(storage.get_item("language").unwrap(), None);
        storage.remove_item("language").unwrap();
    }

    #[test]
    fn test_poisoned_lock() {
        let storage = MemoryStorage::with_items([("language", "en")]);
        let poisoner = storage.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.items.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            storage.get_item("language"),
            Err(StorageError::Poisoned)
        ));
        assert!(matches!(
            storage.set_item("language", "km"),
            Err(StorageError::Poisoned)
        ));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_clones_share_contents() {
        let storage = MemoryStorage::with_items([("user", "")]);
        let other = storage.clone();
        other.set_item("language", "en").unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some(""));
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));
    }
}
