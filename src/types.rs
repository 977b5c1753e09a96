//! Session data types exchanged with storage and the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SessionError;

const NICKNAME: &str = "nickname";

/// User record stored alongside the token.
///
/// The record is an opaque JSON object: every field, including explicit
/// `null`s, is stored and read back unchanged. Only `nickname` has meaning
/// here, and it is read on demand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser {
    fields: Map<String, Value>,
}

impl SessionUser {
    pub fn with_nickname(nickname: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(NICKNAME.to_owned(), Value::String(nickname.into()));
        Self { fields }
    }

    /// Parse a user record handed in by a caller.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidInput`] unless `raw` is a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        serde_json::from_str(raw).map_err(SessionError::InvalidInput)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// `nickname` when it is present and a string.
    pub fn nickname(&self) -> Option<&str> {
        self.fields.get(NICKNAME).and_then(Value::as_str)
    }

    /// Nickname suitable for display, if one is set and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.nickname().filter(|n| !n.is_empty())
    }
}

impl From<Map<String, Value>> for SessionUser {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Body returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl LoginResponse {
    /// Parse a login body handed in by a caller.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidInput`] if `raw` has no string `token`.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        serde_json::from_str(raw).map_err(SessionError::InvalidInput)
    }

    /// Split the login body into the stored token and user record.
    pub fn into_parts(self) -> (String, SessionUser) {
        let mut user = SessionUser::default();
        if let Some(email) = self.email {
            user.insert("email", Value::String(email));
        }
        if let Some(nickname) = self.nickname {
            user.insert(NICKNAME, Value::String(nickname));
        }
        (self.token, user)
    }
}
