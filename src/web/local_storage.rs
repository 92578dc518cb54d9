//! `window.localStorage` as a `KeyValueStore`

use web_sys::{Storage, Window};

use crate::api::helpers::js_error_message;
use crate::storage::{KeyValueStore, StorageError};

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Fails when the browser blocks or lacks `localStorage`
    pub fn from_window(window: &Window) -> Result<Self, StorageError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable("localStorage is not provided".to_string())),
            Err(e) => Err(StorageError::Unavailable(js_error_message(&e))),
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Operation { op: "get", reason: js_error_message(&e) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Operation { op: "set", reason: js_error_message(&e) })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Operation { op: "remove", reason: js_error_message(&e) })
    }
}
