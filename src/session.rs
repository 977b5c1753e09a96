//! Token and user persistence.
//!
//! `SessionStore` owns the two storage slots (token, user) and is passed
//! explicitly to everything that needs session state. Token and user are
//! only ever written and cleared together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::storage::KeyValueStore;
use crate::types::{LoginResponse, SessionUser};

/// Full-page navigation, injected so `logout` can be exercised off-browser.
pub trait Navigator {
    /// Navigate the page to `href`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Navigation`] if the host refuses the navigation.
    fn navigate(&self, href: &str) -> Result<(), SessionError>;
}

/// Facade over the token and user storage slots.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, config: SessionConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored token, exactly as written (may be empty).
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.storage.get_item(&self.config.token_key)
    }

    /// Stored user record.
    ///
    /// Empty text and JSON `null` read as no user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedUser`] if the stored text is not a
    /// valid user record. No fallback is substituted.
    pub fn user(&self) -> Result<Option<SessionUser>, SessionError> {
        match self.storage.get_item(&self.config.user_key)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str::<Option<SessionUser>>(&raw)
                .map_err(SessionError::MalformedUser),
            _ => Ok(None),
        }
    }

    /// Store token and user, replacing whatever was there.
    ///
    /// If the user write fails the token is removed again, so a failed
    /// call never leaves a token without its user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Serialize`] if the user cannot be encoded,
    /// or the storage error from either write.
    pub fn set_auth(&self, token: &str, user: &SessionUser) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user).map_err(SessionError::Serialize)?;
        self.storage.set_item(&self.config.token_key, token)?;
        if let Err(e) = self.storage.set_item(&self.config.user_key, &encoded) {
            if let Err(rollback) = self.storage.remove_item(&self.config.token_key) {
                log::warn!("failed to roll back token after user write error: {rollback}");
            }
            return Err(e);
        }
        log::debug!("session stored for {:?}", user.display_name());
        Ok(())
    }

    /// Store the session returned by the login endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::set_auth`].
    pub fn set_auth_from_login(&self, login: LoginResponse) -> Result<(), SessionError> {
        let (token, user) = login.into_parts();
        self.set_auth(&token, &user)
    }

    /// Remove token and user. Clearing an empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates storage removal failures.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove_item(&self.config.token_key)?;
        self.storage.remove_item(&self.config.user_key)?;
        log::debug!("session cleared");
        Ok(())
    }

    /// True iff a non-empty token is stored.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.token()?.is_some_and(|t| !t.is_empty()))
    }

    /// Non-empty token for the `Authorization` header, if any.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn bearer_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token()?.filter(|t| !t.is_empty()))
    }

    /// Clear the session and navigate to the home route.
    ///
    /// # Errors
    ///
    /// Propagates the clear failure (navigation is then skipped) or the
    /// navigator's error.
    pub fn logout(&self, navigator: &impl Navigator) -> Result<(), SessionError> {
        self.clear()?;
        navigator.navigate(&self.config.home_route)
    }
}
