//! Browser bindings, compiled only with the `hydrate` feature.
//!
//! Each submodule implements one of the crate's seams against the real
//! browser: `localStorage`, `location`, `fetch`, and the nav DOM. The
//! `bindings` module exposes the whole session to page scripts as `Auth`.

pub mod bindings;
pub mod dom;
pub mod fetch;
pub mod local_storage;

pub use bindings::AuthHandle;
pub use dom::{BrowserNavigator, DomNav};
pub use fetch::FetchTransport;
pub use local_storage::LocalStorage;

use wasm_bindgen::JsValue;

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
