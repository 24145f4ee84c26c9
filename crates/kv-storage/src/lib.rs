//! Key-Value Storage Port
//!
//! A tiny get/set/remove/clear interface over string values.
//! `LocalStorage` talks to the browser's `window.localStorage`;
//! `MemoryStore` keeps everything in a map so callers can be tested natively.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No `window` or `localStorage` (non-browser target, privacy mode)
    #[error("storage backend unavailable")]
    Unavailable,
    /// Reading a key failed
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    /// Writing or removing a key failed (quota exceeded, storage disabled)
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Minimal key-value port
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

// ========================
// Browser localStorage
// ========================

/// Browser `localStorage` adapter.
///
/// Holds no handle: the storage object is looked up on each call, so the
/// adapter is `Copy + Send + Sync` and can be captured by Leptos callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?.clear().map_err(|e| StorageError::Write {
            key: "*".to_string(),
            reason: js_reason(&e),
        })
    }
}

// ========================
// In-memory stand-in
// ========================

/// In-memory store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    /// When set, every write fails like a full quota would
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value (builder style)
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check_writable("*")?;
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 2);

        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_memory_store_clear() {
        let store = MemoryStore::new().with_entry("x", "1").with_entry("y", "2");
        assert_eq!(store.len(), 2);
        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_writes_leave_entries_untouched() {
        let store = MemoryStore::new().with_entry("k", "old");
        store.set_fail_writes(true);

        let err = store.set("k", "new").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "k"));
        assert!(store.remove("k").is_err());
        assert!(store.clear().is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("old"));

        store.set_fail_writes(false);
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_error_messages() {
        let err = StorageError::Write { key: "k".into(), reason: "full".into() };
        assert_eq!(err.to_string(), "failed to write 'k': full");
        assert_eq!(StorageError::Unavailable.to_string(), "storage backend unavailable");
    }
}
