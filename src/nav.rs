//! Nav bar auth links.
//!
//! `nav_links` turns login status into link descriptors without touching
//! the DOM. `update_nav` applies them to a [`NavHost`], replacing whatever
//! auth links the host held before.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::types::SessionUser;

/// Href used by links whose activation is handled in script.
pub const SCRIPT_HREF: &str = "#";

/// What activating a link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Plain navigation to `href`.
    Follow,
    /// Suppress default navigation and log out.
    Logout,
}

/// One auth link in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub action: NavAction,
}

impl NavLink {
    fn follow(label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: href.to_owned(),
            action: NavAction::Follow,
        }
    }
}

/// Links for the given login status.
///
/// Logged in: profile link labeled with the nickname (or the configured
/// default) followed by a logout link. Logged out: a single login link.
pub fn nav_links(
    logged_in: bool,
    user: Option<&SessionUser>,
    config: &SessionConfig,
) -> Vec<NavLink> {
    if !logged_in {
        return vec![NavLink::follow(&config.login_label, &config.login_route)];
    }

    let label = user
        .and_then(SessionUser::display_name)
        .unwrap_or(config.default_nickname.as_str());

    vec![
        NavLink::follow(label, &config.profile_route),
        NavLink {
            label: config.logout_label.clone(),
            href: SCRIPT_HREF.to_owned(),
            action: NavAction::Logout,
        },
    ]
}

/// Container that holds the nav bar's auth links.
pub trait NavHost {
    /// Remove every child marked with `class`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Dom`] if the host rejects the removal.
    fn remove_owned(&mut self, class: &str) -> Result<(), SessionError>;

    /// Append a link marked with `class`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Dom`] if the element cannot be created or
    /// attached.
    fn append(&mut self, link: &NavLink, class: &str) -> Result<(), SessionError>;
}

/// Re-render the auth links into `host`. No-op when `host` is `None`.
///
/// Links are computed before the host is touched, so a malformed stored
/// user leaves the existing links in place.
///
/// # Errors
///
/// Returns [`SessionError::MalformedUser`] for an unreadable user record,
/// or the host's error.
pub fn update_nav<S, H>(session: &SessionStore<S>, host: Option<&mut H>) -> Result<(), SessionError>
where
    S: KeyValueStore,
    H: NavHost + ?Sized,
{
    let Some(host) = host else {
        log::debug!("nav container not found, skipping auth links");
        return Ok(());
    };

    let logged_in = session.is_logged_in()?;
    let user = if logged_in { session.user()? } else { None };
    let config = session.config();
    let links = nav_links(logged_in, user.as_ref(), config);

    host.remove_owned(&config.owned_class)?;
    for link in &links {
        host.append(link, &config.owned_class)?;
    }
    log::debug!("rendered {} auth nav link(s)", links.len());
    Ok(())
}
