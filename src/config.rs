//! Session configuration: storage keys, routes, selectors, and labels.
//!
//! Defaults match the GovLICA pages. A page may override any subset of
//! fields with a JSON object; omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SessionError;

pub const DEFAULT_TOKEN_KEY: &str = "govlica_token";
pub const DEFAULT_USER_KEY: &str = "govlica_user";
pub const DEFAULT_NAV_SELECTOR: &str = ".nav-links";
pub const DEFAULT_OWNED_CLASS: &str = "auth-nav";
pub const DEFAULT_HOME_ROUTE: &str = "/";
pub const DEFAULT_LOGIN_ROUTE: &str = "/user/login";
pub const DEFAULT_PROFILE_ROUTE: &str = "/mypage";
pub const DEFAULT_NICKNAME: &str = "User";
pub const DEFAULT_LOGIN_LABEL: &str = "Login";
pub const DEFAULT_LOGOUT_LABEL: &str = "Logout";

/// Severity for the browser console logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// `localStorage` key holding the raw token.
    pub token_key: String,
    /// `localStorage` key holding the JSON user record.
    pub user_key: String,
    /// Selector for the nav container whose auth links are managed.
    pub nav_selector: String,
    /// Class marking the nav children this crate owns and replaces.
    pub owned_class: String,
    pub home_route: String,
    pub login_route: String,
    pub profile_route: String,
    /// Profile link label when the user has no nickname.
    pub default_nickname: String,
    pub login_label: String,
    pub logout_label: String,
    pub log_level: LogLevel,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_owned(),
            owned_class: DEFAULT_OWNED_CLASS.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            profile_route: DEFAULT_PROFILE_ROUTE.to_owned(),
            default_nickname: DEFAULT_NICKNAME.to_owned(),
            login_label: DEFAULT_LOGIN_LABEL.to_owned(),
            logout_label: DEFAULT_LOGOUT_LABEL.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl SessionConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfig`] if the text is not a JSON
    /// object matching the config fields.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| SessionError::InvalidConfig(e.to_string()))
    }
}
