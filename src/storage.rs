//! Key-value storage backing the session.
//!
//! `KeyValueStore` mirrors the subset of the Web Storage API the session
//! needs. `MemoryStorage` is the native implementation used off-browser;
//! the `localStorage` binding lives in `web::LocalStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SessionError;

/// String-keyed, string-valued persistent storage.
///
/// Methods take `&self`: browser storage is mutated through shared handles.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backend rejects the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backend rejects the write
    /// (e.g. quota exceeded).
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a value. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

/// In-memory store with Web Storage semantics.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
