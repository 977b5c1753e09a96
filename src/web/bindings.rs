//! JS-facing session handle.
//!
//! Page scripts call `Auth.init()` once and keep the returned handle for
//! the lifetime of the page. Init wires the nav update to
//! `DOMContentLoaded` (or runs it at once if the document has already
//! loaded); `free()` unhooks the listener and removes the auth links.
//!
//! ERROR HANDLING
//! ==============
//! Methods called from JS throw a JS `Error` carrying the message.
//! Failures inside event handlers (load hook, logout click) have no
//! caller to throw to and are logged instead. `fetch` is the exception:
//! anything the browser would reject with is passed through unchanged.

use std::rc::Rc;

use js_sys::{Function, JSON, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Headers, Request};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::nav::{NavHost, update_nav};
use crate::net::{AUTHORIZATION, authorization_header};
use crate::session::SessionStore;
use crate::types::{LoginResponse, SessionUser};

use super::dom::{BrowserNavigator, DomNav};
use super::local_storage::LocalStorage;

const CONFIG_META_SELECTOR: &str = r#"meta[name="govlica-session"]"#;
const READY_EVENT: &str = "DOMContentLoaded";
const HEADERS: &str = "headers";

type LogoutHandler = Closure<dyn FnMut(Event)>;

fn to_js(e: SessionError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn handler_fn(handler: &LogoutHandler) -> &Function {
    handler.as_ref().unchecked_ref::<Function>()
}

/// Session handle exported to JS as `Auth`.
#[wasm_bindgen(js_name = Auth)]
pub struct AuthHandle {
    session: Rc<SessionStore<LocalStorage>>,
    document: Document,
    logout_handler: Rc<LogoutHandler>,
    ready_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen(js_class = Auth)]
impl AuthHandle {
    /// Open the session over `localStorage` and schedule the nav update.
    ///
    /// # Errors
    ///
    /// Throws when there is no document, storage is unavailable, or the
    /// `govlica-session` meta config does not parse.
    pub fn init() -> Result<AuthHandle, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| to_js(SessionError::Dom("no document".to_owned())))?;
        let config = read_config(&document).map_err(to_js)?;
        _ = console_log::init_with_level(config.log_level.into());

        let session = Rc::new(SessionStore::new(LocalStorage::open().map_err(to_js)?, config));
        let logout_handler = Rc::new(logout_handler(Rc::clone(&session)));

        let mut handle = Self {
            session,
            document,
            logout_handler,
            ready_listener: None,
        };

        if handle.document.ready_state() == "loading" {
            let listener = ready_listener(
                Rc::clone(&handle.session),
                handle.document.clone(),
                Rc::clone(&handle.logout_handler),
            );
            handle
                .document
                .add_event_listener_with_callback(READY_EVENT, listener.as_ref().unchecked_ref())?;
            handle.ready_listener = Some(listener);
        } else {
            render_nav(&handle.session, &handle.document, &handle.logout_handler).map_err(to_js)?;
        }

        log::info!("session helper initialized");
        Ok(handle)
    }

    #[wasm_bindgen(js_name = getToken)]
    pub fn get_token(&self) -> Result<Option<String>, JsValue> {
        self.session.token().map_err(to_js)
    }

    /// Stored user as a plain object, or `null`.
    #[wasm_bindgen(js_name = getUser)]
    pub fn get_user(&self) -> Result<JsValue, JsValue> {
        match self.session.user().map_err(to_js)? {
            Some(user) => {
                let text = serde_json::to_string(&user)
                    .map_err(|e| to_js(SessionError::Serialize(e)))?;
                JSON::parse(&text)
            }
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = setAuth)]
    pub fn set_auth(&self, token: String, user: JsValue) -> Result<(), JsValue> {
        let user = user_from_js(&user)?;
        self.session.set_auth(&token, &user).map_err(to_js)
    }

    /// Store the body returned by the login endpoint (`{token, email, nickname}`).
    #[wasm_bindgen(js_name = setAuthFromLogin)]
    pub fn set_auth_from_login(&self, login: JsValue) -> Result<(), JsValue> {
        let text: String = JSON::stringify(&login)?.into();
        let login = LoginResponse::from_json(&text).map_err(to_js)?;
        self.session.set_auth_from_login(login).map_err(to_js)
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        self.session.clear().map_err(to_js)
    }

    #[wasm_bindgen(js_name = isLoggedIn)]
    pub fn is_logged_in(&self) -> Result<bool, JsValue> {
        self.session.is_logged_in().map_err(to_js)
    }

    pub fn logout(&self) -> Result<(), JsValue> {
        self.session.logout(&BrowserNavigator).map_err(to_js)
    }

    /// `fetch(input, init)` with the bearer token attached.
    ///
    /// `input` goes to the browser's `fetch` untouched and `init` is copied
    /// member for member, so body, credentials, signal, mode, cache and
    /// redirect behave exactly as with a direct call. Only `Authorization`
    /// is overwritten, and only while a token is stored. The returned
    /// promise is the browser's own.
    ///
    /// # Errors
    ///
    /// Throws when there is no window or the token slot cannot be read.
    pub fn fetch(&self, input: JsValue, init: JsValue) -> Result<Promise, JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| to_js(SessionError::Dom("no window".to_owned())))?;
        let authorization = authorization_header(&self.session).map_err(to_js)?;

        // Bad headers in `init` make the browser reject, not throw.
        let init = match request_init(&input, &init, authorization.as_deref()) {
            Ok(init) => init,
            Err(e) => return Ok(Promise::reject(&e)),
        };
        let fetch: Function = Reflect::get(&window, &JsValue::from_str("fetch"))?.dyn_into()?;
        Ok(fetch.call2(&window, &input, &init)?.unchecked_into())
    }

    #[wasm_bindgen(js_name = updateNav)]
    pub fn update_nav(&self) -> Result<(), JsValue> {
        render_nav(&self.session, &self.document, &self.logout_handler).map_err(to_js)
    }
}

impl Drop for AuthHandle {
    fn drop(&mut self) {
        if let Some(listener) = self.ready_listener.take() {
            _ = self.document.remove_event_listener_with_callback(
                READY_EVENT,
                listener.as_ref().unchecked_ref(),
            );
        }
        // The logout handler dies with the handle; drop the links that use it.
        let config = self.session.config();
        let on_logout = handler_fn(&self.logout_handler);
        if let Ok(Some(mut nav)) = DomNav::find(&self.document, &config.nav_selector, on_logout) {
            _ = nav.remove_owned(&config.owned_class);
        }
        log::debug!("session helper torn down");
    }
}

fn read_config(document: &Document) -> Result<SessionConfig, SessionError> {
    let meta = document
        .query_selector(CONFIG_META_SELECTOR)
        .map_err(|e| SessionError::Dom(super::js_message(&e)))?;
    match meta.and_then(|m| m.get_attribute("content")) {
        Some(raw) => SessionConfig::from_json(&raw),
        None => Ok(SessionConfig::default()),
    }
}

fn render_nav(
    session: &SessionStore<LocalStorage>,
    document: &Document,
    on_logout: &LogoutHandler,
) -> Result<(), SessionError> {
    let mut host = DomNav::find(document, &session.config().nav_selector, handler_fn(on_logout))?;
    update_nav(session, host.as_mut())
}

fn logout_handler(session: Rc<SessionStore<LocalStorage>>) -> LogoutHandler {
    Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Err(e) = session.logout(&BrowserNavigator) {
            log::warn!("logout failed: {e}");
        }
    }) as Box<dyn FnMut(_)>)
}

fn ready_listener(
    session: Rc<SessionStore<LocalStorage>>,
    document: Document,
    on_logout: Rc<LogoutHandler>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        if let Err(e) = render_nav(&session, &document, &on_logout) {
            log::warn!("nav update failed: {e}");
        }
    }) as Box<dyn FnMut()>)
}

fn user_from_js(user: &JsValue) -> Result<SessionUser, JsValue> {
    if user.is_null() || user.is_undefined() {
        return Ok(SessionUser::default());
    }
    let text: String = JSON::stringify(user)?.into();
    SessionUser::from_json(&text).map_err(to_js)
}

/// Copy of the caller's `init` with `Authorization` set on its headers.
///
/// Without a token the copy is returned as-is. With one, the headers come
/// from `init.headers` (a `Headers`, a record, or a list of pairs) or, if
/// that is absent, from `input` when it is a `Request`.
fn request_init(
    input: &JsValue,
    init: &JsValue,
    authorization: Option<&str>,
) -> Result<Object, JsValue> {
    let copy = Object::new();
    if init.is_object() {
        Object::assign(&copy, init.unchecked_ref());
    }
    let Some(value) = authorization else {
        return Ok(copy);
    };

    let key = JsValue::from_str(HEADERS);
    let given = Reflect::get(&copy, &key)?;
    let headers = if given.is_undefined() || given.is_null() {
        match input.dyn_ref::<Request>() {
            Some(request) => Headers::new_with_headers(&request.headers())?,
            None => Headers::new()?,
        }
    } else {
        Headers::new_with_str_sequence_sequence(&given)?
    };
    headers.set(AUTHORIZATION, value)?;
    Reflect::set(&copy, &key, &headers)?;
    Ok(copy)
}
