//! Order Persistence
//!
//! `KeyValueStore` is the raw, fallible backend (browser storage, memory).
//! `PersistenceAdapter` is what a card set consumes: it never fails, every
//! backend or decode error is logged and absorbed here.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Storage backend errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage available (disabled, private mode, no window)
    Unavailable(String),
    /// The backend rejected the operation (quota, security error, ...)
    Backend(String),
    /// Stored value is not a JSON array of strings
    Codec(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Backend(msg) => write!(f, "Storage error: {}", msg),
            StorageError::Codec(msg) => write!(f, "Invalid stored order: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Raw string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Best-effort order persistence consumed by `OrderedCardSet`.
///
/// None of these may fail or panic. A failed `save` only means the order
/// will not survive a reload.
pub trait PersistenceAdapter {
    /// Saved order, or `None` if absent, unreadable or malformed
    fn load(&self, key: &str) -> Option<Vec<String>>;

    fn save(&self, key: &str, order: &[String]);

    fn remove(&self, key: &str);
}

/// Stores an order as a JSON array of ids, e.g. `["3","1","2"]`
#[derive(Debug, Clone, Default)]
pub struct JsonOrderStore<S> {
    store: S,
}

impl<S: KeyValueStore> JsonOrderStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn try_load(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str::<Vec<String>>(&raw)
            .map(Some)
            .map_err(|e| StorageError::Codec(e.to_string()))
    }

    fn try_save(&self, key: &str, order: &[String]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(order).map_err(|e| StorageError::Codec(e.to_string()))?;
        self.store.set(key, &raw)
    }
}

impl<S: KeyValueStore> PersistenceAdapter for JsonOrderStore<S> {
    fn load(&self, key: &str) -> Option<Vec<String>> {
        match self.try_load(key) {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring saved card order");
                None
            }
        }
    }

    fn save(&self, key: &str, order: &[String]) {
        if let Err(e) = self.try_save(key, order) {
            tracing::warn!(key, error = %e, "card order not saved");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, error = %e, "saved card order not removed");
        }
    }
}

/// Adapter for card sets without persistence
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl PersistenceAdapter for NoStorage {
    fn load(&self, _key: &str) -> Option<Vec<String>> {
        None
    }

    fn save(&self, _key: &str, _order: &[String]) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory key-value store.
///
/// Clones share the same entries. Reads and writes can be switched to fail
/// to mimic disabled or full browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn fails_writes(&self) -> bool {
        self.fail_writes.get()
    }

    /// Raw stored value, bypassing failure switches
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Backend("writes disabled".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
