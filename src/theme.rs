//! Theme preference: the persisted light/dark choice, the `data-theme`
//! attribute on the document root, and the toggle button icon.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: an absent or unreadable `localStorage` means "use
//! the default", never a failure. The active theme is tracked in crate state
//! rather than read back from the DOM attribute, so the attribute is output
//! only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::consts::THEME_STORAGE_KEY;
use crate::error::WireError;
use crate::{dom, particles};

/// A named visual mode for the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    /// Site default when no preference is stored.
    #[default]
    Dark,
}

impl Theme {
    /// Parse a persisted token. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_storage_value(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The token persisted to storage and mirrored on `data-theme`.
    #[must_use]
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button icon class: each mode advertises the one a click leads to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Read the persisted preference, defaulting to dark.
#[must_use]
pub fn current() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_storage_value(stored.as_deref())
}

/// Switch the page to `theme`: apply the root attribute, persist the choice,
/// refresh the toggle icon, and regenerate the particle field so its colors
/// pick up the new palette.
pub fn set_theme(document: &Document, icon: &Element, theme: Theme) {
    apply_presentation(document, icon, theme);
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
    }
    if let Err(err) = particles::recreate(document) {
        log::warn!("particle field not regenerated: {err}");
    }
}

/// Apply the attribute and icon without touching storage or particles.
fn apply_presentation(document: &Document, icon: &Element, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.storage_value());
    }
    icon.set_class_name(theme.icon_class());
}

/// Wire the toggle button and apply the persisted preference to the page.
///
/// # Errors
///
/// Fails when `#themeToggle` or `#themeIcon` is missing from the markup.
pub fn wire(document: &Document) -> Result<(), WireError> {
    let toggle: Element = dom::by_id(document, "themeToggle")?;
    let icon: Element = dom::by_id(document, "themeIcon")?;

    let initial = current();
    apply_presentation(document, &icon, initial);

    let active = Rc::new(Cell::new(initial));
    let doc = document.clone();
    dom::listen(&toggle, "click", move |_event| {
        let next = active.get().flipped();
        active.set(next);
        set_theme(&doc, &icon, next);
    });
    Ok(())
}
