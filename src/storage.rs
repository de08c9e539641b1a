//! Key/value persistence abstraction
//!
//! Drafts live in the browser's LocalStorage, which can be disabled entirely
//! or reject writes once full. All persistence goes through `KeyValueStore`
//! so a missing or full store degrades the autosave feature to a no-op
//! instead of breaking the form, and so the draft logic can be tested
//! natively against `MemoryStore`.

use std::collections::BTreeMap;
use std::fmt;

/// Storage failure. Always non-fatal: callers log and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Write rejected (quota exceeded or storage read-only)
    WriteRejected,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteRejected => write!(f, "storage rejected the write"),
        }
    }
}

/// Origin-scoped synchronous string store.
///
/// Not keyed by user session: concurrent tabs writing the same key clobber
/// each other. Accepted limitation of the underlying store.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// LocalStorage-backed store (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    /// Acquire LocalStorage if the browser exposes it. `None` means storage
    /// is disabled or blocked; callers skip their persistence wiring.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected)
    }

    fn delete(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("k"), None);

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store_overwrite_replaces() {
        let mut store = MemoryStore::new();
        store.write("k", "first").unwrap();
        store.write("k", "second").unwrap();
        assert_eq!(store.read("k").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_delete_is_idempotent() {
        let mut store = MemoryStore::new();
        store.write("k", "v").unwrap();
        store.delete("k");
        assert_eq!(store.read("k"), None);
        // Deleting an absent key is fine
        store.delete("k");
        assert!(store.is_empty());
    }
}
