use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::config::SessionConfig;
use crate::storage::MemoryStorage;
use crate::types::SessionUser;

/// Transport double that records requests and replies with a canned outcome.
struct RecordingTransport {
    sent: RefCell<Vec<HttpRequest>>,
    outcome: Result<u16, String>,
}

impl RecordingTransport {
    fn ok(status: u16) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            outcome: Ok(status),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            outcome: Err(message.to_owned()),
        }
    }

    fn last(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().expect("a request was sent")
    }
}

impl HttpTransport for RecordingTransport {
    type Response = u16;
    type Error = String;

    async fn send(&self, request: HttpRequest) -> Result<u16, String> {
        self.sent.borrow_mut().push(request);
        self.outcome.clone()
    }
}

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new(), SessionConfig::default())
}

// =============================================================
// authorization_header
// =============================================================

#[test]
fn authorization_header_absent_without_token() {
    let s = store();
    assert_eq!(authorization_header(&s).unwrap(), None);

    s.storage().set_item("govlica_token", "").unwrap();
    assert_eq!(authorization_header(&s).unwrap(), None);
}

#[test]
fn authorization_header_is_bearer_token() {
    let s = store();
    s.set_auth("abc", &SessionUser::default()).unwrap();
    assert_eq!(authorization_header(&s).unwrap().as_deref(), Some("Bearer abc"));
}

#[test]
fn authorization_header_tracks_logout() {
    let s = store();
    s.set_auth("abc", &SessionUser::default()).unwrap();
    s.clear().unwrap();
    assert_eq!(authorization_header(&s).unwrap(), None);
}

// =============================================================
// Header injection
// =============================================================

#[test]
fn no_token_sends_request_unmodified() {
    let s = store();
    let transport = RecordingTransport::ok(200);
    let request = HttpRequest::get("/api/user/keys").header("Accept", "application/json");

    let result = block_on(auth_fetch(&s, &transport, request.clone())).unwrap();

    assert_eq!(result, Ok(200));
    assert_eq!(transport.last(), request);
    assert_eq!(transport.last().header_value(AUTHORIZATION), None);
}

#[test]
fn stored_token_adds_bearer_header() {
    let s = store();
    s.set_auth("abc", &SessionUser::with_nickname("alice")).unwrap();
    let transport = RecordingTransport::ok(200);

    let request = HttpRequest::get("/api/user/favorites");
    block_on(auth_fetch(&s, &transport, request)).unwrap().unwrap();

    assert_eq!(transport.last().header_value("authorization"), Some("Bearer abc"));
}

#[test]
fn empty_token_is_treated_as_absent() {
    let s = store();
    s.storage().set_item("govlica_token", "").unwrap();
    let transport = RecordingTransport::ok(200);

    block_on(auth_fetch(&s, &transport, HttpRequest::get("/x"))).unwrap().unwrap();

    assert!(transport.last().headers.is_empty());
}

#[test]
fn bearer_header_replaces_caller_authorization() {
    let s = store();
    s.set_auth("abc", &SessionUser::default()).unwrap();
    let transport = RecordingTransport::ok(200);
    let request = HttpRequest::get("/x")
        .header("authorization", "Basic zzz")
        .header("X-Trace", "1");

    block_on(auth_fetch(&s, &transport, request)).unwrap().unwrap();

    let sent = transport.last();
    let auth: Vec<_> = sent
        .headers
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case(AUTHORIZATION))
        .collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(sent.header_value(AUTHORIZATION), Some("Bearer abc"));
    assert_eq!(sent.header_value("x-trace"), Some("1"));
}

#[test]
fn method_url_and_body_pass_through() {
    let s = store();
    s.set_auth("abc", &SessionUser::default()).unwrap();
    let transport = RecordingTransport::ok(201);
    let request = HttpRequest::post("/api/user/keys").body(r#"{"name":"k"}"#);

    let result = block_on(auth_fetch(&s, &transport, request)).unwrap();

    assert_eq!(result, Ok(201));
    let sent = transport.last();
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.url, "/api/user/keys");
    assert_eq!(sent.body.as_deref(), Some(r#"{"name":"k"}"#));
}

// =============================================================
// Failure pass-through
// =============================================================

#[test]
fn transport_error_is_returned_as_is() {
    let s = store();
    let transport = RecordingTransport::failing("connection refused");

    let result = block_on(auth_fetch(&s, &transport, HttpRequest::get("/x"))).unwrap();

    assert_eq!(result, Err("connection refused".to_owned()));
}

#[test]
fn error_status_is_not_interpreted() {
    let s = store();
    s.set_auth("expired", &SessionUser::default()).unwrap();
    let transport = RecordingTransport::ok(401);

    let result = block_on(auth_fetch(&s, &transport, HttpRequest::get("/x"))).unwrap();

    assert_eq!(result, Ok(401));
    assert!(s.is_logged_in().unwrap());
}
