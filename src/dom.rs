//! Shared browser lookups and listener plumbing.
//!
//! Controllers receive their element handles from here instead of doing
//! ambient lookups inline, so every missing-anchor path funnels through
//! [`WireError`] and gets reported uniformly at boot.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::WireError;

/// The global window.
///
/// # Errors
///
/// Returns [`WireError::NoWindow`] outside a browser environment.
pub fn window() -> Result<Window, WireError> {
    web_sys::window().ok_or(WireError::NoWindow)
}

/// The page document.
///
/// # Errors
///
/// Returns [`WireError::NoDocument`] when the window carries no document.
pub fn document() -> Result<Document, WireError> {
    window()?.document().ok_or(WireError::NoDocument)
}

/// Look up an element by id and downcast it to the expected element type.
///
/// # Errors
///
/// Returns [`WireError::MissingElement`] when the element is absent or is not
/// of type `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WireError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WireError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| WireError::MissingElement(id.to_owned()))
}

/// All elements matching `selector`, in document order.
///
/// Invalid selectors and non-element nodes yield an empty/shorter list rather
/// than an error; callers treat "nothing matched" uniformly.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach an event listener for the lifetime of the page.
///
/// The closure is intentionally leaked: these listeners are only detached by
/// page unload.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` on the next animation frame.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    let Ok(window) = window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}
