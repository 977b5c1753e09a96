//! Authenticated fetch wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are returned exactly as the
//! transport produced them. Only reading the token can fail on our side.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::error::SessionError;
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

pub const AUTHORIZATION: &str = "Authorization";

/// Request handed to an [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// First header value matching `name` case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replace every header named `name` (any case) with a single value.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value));
    }
}

/// The environment's request primitive.
///
/// Single-threaded by design (wasm), hence no `Send` bound on the future.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    type Response;
    type Error;

    /// Send a request.
    ///
    /// # Errors
    ///
    /// Whatever the underlying transport reports.
    async fn send(&self, request: HttpRequest) -> Result<Self::Response, Self::Error>;
}

/// Value for the `Authorization` header: `Bearer <token>` when the session
/// holds a non-empty token.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if the token slot cannot be read.
pub fn authorization_header<S: KeyValueStore>(
    session: &SessionStore<S>,
) -> Result<Option<String>, SessionError> {
    Ok(session.bearer_token()?.map(|token| format!("Bearer {token}")))
}

/// Send `request` through `transport`, adding `Authorization: Bearer <token>`
/// when the session holds a non-empty token.
///
/// The outer `Result` fails only if the token cannot be read; the inner one
/// is the transport's own outcome, uninterpreted.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if the token slot cannot be read.
pub async fn auth_fetch<S, T>(
    session: &SessionStore<S>,
    transport: &T,
    mut request: HttpRequest,
) -> Result<Result<T::Response, T::Error>, SessionError>
where
    S: KeyValueStore,
    T: HttpTransport,
{
    if let Some(value) = authorization_header(session)? {
        log::debug!("attaching bearer token to {} {}", request.method, request.url);
        request.set_header(AUTHORIZATION, value);
    }
    Ok(transport.send(request).await)
}
