use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Error writing to the persistent key-value store.
#[derive(Debug, Error)]
#[error("storage write failed: {message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Minimal surface over the browser's persistent storage.
///
/// The frontend backs this with `window.localStorage`; tests and native
/// callers use [`MemoryStorage`].
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("user").is_none());
        storage.set("user", "value").unwrap();
        assert_eq!(storage.get("user").as_deref(), Some("value"));
        storage.remove("user");
        assert!(storage.get("user").is_none());
    }
}
