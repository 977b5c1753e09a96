//! `window.localStorage` as a [`KeyValueStore`].

use crate::error::SessionError;
use crate::storage::KeyValueStore;

use super::js_message;

#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when there is no window or storage
    /// access is denied (e.g. disabled cookies, sandboxed frame).
    pub fn open() -> Result<Self, SessionError> {
        let window =
            web_sys::window().ok_or_else(|| SessionError::Storage("no window".to_owned()))?;
        let inner = window
            .local_storage()
            .map_err(|e| SessionError::Storage(js_message(&e)))?
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get_item(key).map_err(|e| SessionError::Storage(js_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.inner.set_item(key, value).map_err(|e| SessionError::Storage(js_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove_item(key).map_err(|e| SessionError::Storage(js_message(&e)))
    }
}
