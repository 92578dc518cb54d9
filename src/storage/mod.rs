//! Key-value persistence for the last valid input
//!
//! The controller only sees `KeyValueStore`; the browser build plugs in
//! `localStorage` and tests use `MemoryStore`.

pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store is not reachable (disabled, sandboxed, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store refused an operation (quota, security error, ...)
    #[error("storage operation '{op}' failed: {reason}")]
    Operation { op: &'static str, reason: String },
}

/// Minimal string key-value capability
pub trait KeyValueStore {
    /// `Ok(None)` when nothing is stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// A store bound to the one key the widget persists under
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    pub const DEFAULT_KEY: &'static str = "svg-preview:last-input";

    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Result<Option<String>, StorageError> {
        self.store.get(&self.key)
    }

    pub fn save(&mut self, text: &str) -> Result<(), StorageError> {
        self.store.set(&self.key, text)
    }

    pub fn forget(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish()
    }
}
