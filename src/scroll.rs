//! Navbar chrome, the scroll-to-top control, and smooth anchor scrolling.
//!
//! Chrome is a pure function of the scroll offset: past the threshold the
//! navbar condenses and the scroll-to-top control appears; at or below it both
//! clear. Anchor clicks scroll to the target minus a fixed-header allowance.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::{ANCHOR_HEADER_OFFSET_PX, NAVBAR_SCROLL_THRESHOLD_PX};
use crate::dom;
use crate::error::WireError;

/// Whether the scrolled-page chrome is engaged at `offset_px`.
///
/// The boundary is strict: exactly 100px keeps the resting chrome.
#[must_use]
pub fn chrome_engaged(offset_px: f64) -> bool {
    offset_px > NAVBAR_SCROLL_THRESHOLD_PX
}

/// Scroll position for an anchor target at `offset_top`, leaving room for the
/// fixed header. May be negative near the top of the page; the browser clamps.
#[must_use]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_HEADER_OFFSET_PX
}

/// Wire the scroll listener, the scroll-to-top control, and anchor links.
///
/// # Errors
///
/// Fails when `#navbar` or `#scrollTop` is missing from the markup.
pub fn wire(document: &Document) -> Result<(), WireError> {
    let navbar: Element = dom::by_id(document, "navbar")?;
    let scroll_top: Element = dom::by_id(document, "scrollTop")?;
    let window = dom::window()?;

    {
        let window = window.clone();
        let navbar = navbar.clone();
        let scroll_top = scroll_top.clone();
        dom::listen(&window.clone(), "scroll", move |_event| {
            let engaged = chrome_engaged(window.scroll_y().unwrap_or(0.0));
            set_class(&navbar, "scrolled", engaged);
            set_class(&scroll_top, "show", engaged);
        });
    }

    {
        let window = window.clone();
        dom::listen(&scroll_top, "click", move |_event| {
            smooth_scroll_to(&window, 0.0);
        });
    }

    for anchor in dom::query_all(document, r##"a[href^="#"]"##) {
        let doc = document.clone();
        let window = window.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" href is not a valid selector; ignore it.
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            if let Some(target) = target.dyn_ref::<HtmlElement>() {
                smooth_scroll_to(&window, anchor_scroll_top(f64::from(target.offset_top())));
            }
        });
    }
    Ok(())
}

fn set_class(element: &Element, class: &str, on: bool) {
    if on {
        let _ = element.class_list().add_1(class);
    } else {
        let _ = element.class_list().remove_1(class);
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
