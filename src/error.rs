//! Error type shared by the session, nav, and browser layers.
//!
//! Network failures are not represented here: `auth_fetch` hands back the
//! transport's own error untouched.

/// Failures surfaced by session storage, rendering, and navigation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("stored user record is malformed: {0}")]
    MalformedUser(#[source] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),
    #[error("failed to serialize user record: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}
