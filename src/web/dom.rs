//! Nav container and page navigation against the live DOM.

use js_sys::Function;
use web_sys::{Document, Element};

use crate::error::SessionError;
use crate::nav::{NavAction, NavHost, NavLink};
use crate::session::Navigator;

use super::js_message;

fn dom_err(e: wasm_bindgen::JsValue) -> SessionError {
    SessionError::Dom(js_message(&e))
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, href: &str) -> Result<(), SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Navigation("no window".to_owned()))?;
        window
            .location()
            .set_href(href)
            .map_err(|e| SessionError::Navigation(js_message(&e)))
    }
}

/// The nav bar container, with the click handler attached to logout links.
pub struct DomNav<'a> {
    document: &'a Document,
    container: Element,
    on_logout: &'a Function,
}

impl<'a> DomNav<'a> {
    /// Locate the container matching `selector`. `Ok(None)` when the page
    /// has no such element.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Dom`] if `selector` is not a valid selector.
    pub fn find(
        document: &'a Document,
        selector: &str,
        on_logout: &'a Function,
    ) -> Result<Option<Self>, SessionError> {
        let container = document.query_selector(selector).map_err(dom_err)?;
        Ok(container.map(|container| Self {
            document,
            container,
            on_logout,
        }))
    }
}

impl NavHost for DomNav<'_> {
    fn remove_owned(&mut self, class: &str) -> Result<(), SessionError> {
        // Static NodeList, safe to mutate the tree while walking it.
        let owned = self.container.query_selector_all(&format!(".{class}")).map_err(dom_err)?;
        for i in 0..owned.length() {
            if let Some(node) = owned.item(i) {
                if let Some(parent) = node.parent_node() {
                    parent.remove_child(&node).map_err(dom_err)?;
                }
            }
        }
        Ok(())
    }

    fn append(&mut self, link: &NavLink, class: &str) -> Result<(), SessionError> {
        let anchor = self.document.create_element("a").map_err(dom_err)?;
        anchor.set_attribute("href", &link.href).map_err(dom_err)?;
        anchor.set_class_name(class);
        anchor.set_text_content(Some(&link.label));
        if link.action == NavAction::Logout {
            anchor
                .add_event_listener_with_callback("click", self.on_logout)
                .map_err(dom_err)?;
        }
        self.container.append_child(&anchor).map_err(dom_err)?;
        Ok(())
    }
}
