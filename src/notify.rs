//! Transient status banners stacked in a fixed corner container.
//!
//! The container is created lazily, once per page. Banners auto-dismiss after
//! a fixed delay: the visible class is dropped first, then the element is
//! detached after the fade-out allowance. Manual dismissal goes through the
//! page's generic close-button behavior, so detachment checks the banner is
//! still attached before removing it.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::consts::{NOTIFY_DISMISS_MS, NOTIFY_EXIT_MS};

/// Flavor of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl Kind {
    /// Alert styling class for this flavor.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }

    /// Leading glyph shown next to the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "⚠",
        }
    }
}

/// One banner: flavor, message, and a creation-time-derived identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: Kind,
    pub message: String,
    pub id: String,
}

impl Notification {
    #[must_use]
    pub fn new(kind: Kind, message: impl Into<String>, now_ms: u64) -> Self {
        Self { kind, message: message.into(), id: format!("notification-{now_ms}") }
    }

    /// Banner body markup: glyph, message, and the close affordance wired to
    /// the page's generic dismiss behavior.
    #[must_use]
    pub fn body_html(&self) -> String {
        format!(
            r#"<div class="d-flex align-items-center"><span class="me-2 fs-5">{}</span><span>{}</span></div><button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>"#,
            self.kind.glyph(),
            self.message
        )
    }
}

/// Get or lazily create the fixed-position banner container.
pub fn ensure_container(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id("notification-container") {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_id("notification-container");
    let _ = container.set_attribute(
        "style",
        "position: fixed; top: 20px; right: 20px; z-index: 9999; max-width: 400px;",
    );
    let body = document.body()?;
    let _ = body.append_child(&container);
    Some(container)
}

/// Append a banner and schedule its auto-dismissal.
pub fn show(document: &Document, kind: Kind, message: &str) {
    let Some(container) = ensure_container(document) else {
        return;
    };
    let note = Notification::new(kind, message, now_stamp());

    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_id(&note.id);
    banner.set_class_name(&format!("alert {} alert-dismissible fade show", kind.alert_class()));
    let _ = banner.set_attribute("role", "alert");
    let _ = banner.set_attribute(
        "style",
        "box-shadow: 0 4px 12px rgba(0,0,0,0.15); border: none; margin-bottom: 10px;",
    );
    banner.set_inner_html(&note.body_html());
    let _ = container.append_child(&banner);

    spawn_local(dismiss_later(banner));
}

async fn dismiss_later(banner: Element) {
    sleep(Duration::from_millis(NOTIFY_DISMISS_MS)).await;
    let _ = banner.class_list().remove_1("show");
    sleep(Duration::from_millis(NOTIFY_EXIT_MS)).await;
    if banner.is_connected() {
        banner.remove();
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_stamp() -> u64 {
    js_sys::Date::now() as u64
}
