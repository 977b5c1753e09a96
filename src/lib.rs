//! # govlica-session
//!
//! Browser session helper for the GovLICA pages, compiled to WASM.
//! Keeps the bearer token and user record in `localStorage`, attaches the
//! token to outgoing requests, and swaps the nav bar's auth links between
//! the logged-in and logged-out sets.
//!
//! DESIGN
//! ======
//! Session logic is written against small traits (`KeyValueStore`,
//! `Navigator`, `HttpTransport`, `NavHost`) so it builds and tests natively.
//! The browser implementations of those traits, and the JS-facing `Auth`
//! handle, live in `web` behind the `hydrate` feature.

pub mod config;
pub mod error;
pub mod nav;
pub mod net;
pub mod session;
pub mod storage;
pub mod types;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::SessionConfig;
pub use error::SessionError;
pub use nav::{NavAction, NavHost, NavLink, nav_links, update_nav};
pub use net::{HttpRequest, HttpTransport, auth_fetch, authorization_header};
pub use session::{Navigator, SessionStore};
pub use storage::{KeyValueStore, MemoryStorage};
pub use types::{LoginResponse, SessionUser};
