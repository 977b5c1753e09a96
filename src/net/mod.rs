//! Outgoing HTTP with the session's bearer token attached.
//!
//! The transport is injected: the browser uses `web::FetchTransport`,
//! tests use a recording double.

pub mod fetch;

pub use fetch::{AUTHORIZATION, HttpRequest, HttpTransport, auth_fetch, authorization_header};
