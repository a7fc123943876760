//! Behavior layer for the folio portfolio page, compiled to WebAssembly.
//!
//! The page itself is static HTML/CSS; this crate attaches everything
//! interactive after load: theme switching, the decorative particle field,
//! scroll-driven reveals and counters, project filtering, navbar chrome, and
//! the contact form. Each controller is wired independently so a missing
//! anchor or widget degrades that one feature instead of the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Persisted light/dark preference and the toggle button |
//! | [`particles`] | Decorative particle field generation |
//! | [`reveal`] | Viewport-entry reveals and the one-shot counter trigger |
//! | [`counter`] | Count-up ramps toward `data-target` values |
//! | [`filter`] | Category filtering of project cards |
//! | [`scroll`] | Navbar chrome, scroll-to-top, smooth anchor scrolling |
//! | [`contact`] | Contact form submission lifecycle |
//! | [`email`] | Bindings to the page-global EmailJS widget |
//! | [`notify`] | Transient status banners |
//! | [`dom`] | Element lookup and listener plumbing |
//! | [`consts`] | Shared tunables (counts, delays, thresholds, identifiers) |

pub mod consts;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod email;
pub mod error;
pub mod filter;
pub mod notify;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Wire every controller, logging and continuing on individual failures.
///
/// Theme goes first so the first paint already honors the persisted
/// preference; the contact form goes last because it is the only controller
/// with an external dependency.
pub fn boot(document: &Document) {
    if let Err(err) = theme::wire(document) {
        log::error!("theme wiring failed: {err}");
    }
    if let Err(err) = particles::wire(document) {
        log::warn!("particle field unavailable: {err}");
    }
    if let Err(err) = reveal::wire(document) {
        log::warn!("scroll reveals unavailable: {err}");
    }
    if let Err(err) = filter::wire(document) {
        log::warn!("project filter unavailable: {err}");
    }
    if let Err(err) = scroll::wire(document) {
        log::warn!("scroll chrome unavailable: {err}");
    }
    if let Err(err) = contact::wire(document) {
        log::error!("contact form wiring failed: {err}");
    }
}

/// Entry point invoked by the module loader once the page is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    match dom::document() {
        Ok(document) => boot(&document),
        Err(err) => log::error!("page boot failed: {err}"),
    }
}
