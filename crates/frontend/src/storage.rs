//! localStorage implementation of the core storage seam.

use critterfacts_core::{KeyValueStorage, StorageError};

/// [`KeyValueStorage`] backed by `window.localStorage`.
///
/// Reads degrade to "absent" when storage is unavailable (private
/// browsing, sandboxed frames); writes report the failure so callers can
/// log it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage =
            Self::raw().ok_or_else(|| StorageError::new("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::new("localStorage write rejected"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}
