//! Browser Storage
//!
//! `window.localStorage` as a card order backend.

use card_order::{JsonOrderStore, KeyValueStore, MemoryStore, StorageError};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, looked up on each access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable("localStorage disabled".to_string()))
    }

    /// Whether localStorage can be used at all
    pub fn is_available() -> bool {
        BrowserStorage.storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// Site storage backend: localStorage, or session memory when it is missing
#[derive(Debug, Clone)]
pub enum SiteStorage {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl SiteStorage {
    pub fn detect() -> Self {
        if BrowserStorage::is_available() {
            SiteStorage::Browser(BrowserStorage)
        } else {
            tracing::warn!("localStorage unavailable, card order will not survive a reload");
            SiteStorage::Memory(MemoryStore::new())
        }
    }
}

impl KeyValueStore for SiteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            SiteStorage::Browser(store) => store.get(key),
            SiteStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SiteStorage::Browser(store) => store.set(key, value),
            SiteStorage::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            SiteStorage::Browser(store) => store.remove(key),
            SiteStorage::Memory(store) => store.remove(key),
        }
    }
}

/// Adapter used by every board on the site
pub type OrderStore = JsonOrderStore<SiteStorage>;

pub fn order_store() -> OrderStore {
    JsonOrderStore::new(SiteStorage::detect())
}
