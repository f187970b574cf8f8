use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use web_sys::window;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage rejected write for key `{0}`")]
    WriteRejected(String),
}

/// Per-browser key/value persistence used by the cart and the contact draft.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, or a session-only map when the browser refuses
/// to hand one out (private mode, disabled storage).
#[derive(Clone)]
pub enum SiteStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl SiteStorage {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => SiteStorage::Local(storage),
            None => {
                warn!("localStorage unavailable, keeping state for this session only");
                SiteStorage::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for SiteStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            SiteStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            SiteStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SiteStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected(key.to_string())),
            SiteStorage::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            SiteStorage::Local(storage) => {
                let _ = storage.remove_item(key);
            }
            SiteStorage::Memory(store) => store.remove(key),
        }
    }
}

/// Shared in-memory map. Clones see the same entries.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
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
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::default();
        let other = store.clone();
        store.set("cart", "[]").unwrap();
        assert_eq!(other.get("cart").as_deref(), Some("[]"));

        other.remove("cart");
        assert_eq!(store.get("cart"), None);
        assert_eq!(store.len(), 0);
    }
}
