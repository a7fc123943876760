//! Category filtering for the project grid.
//!
//! DESIGN
//! ======
//! Every button click replans from the full card set and the requested token;
//! there is no dependence on the previous filter state. Matching cards fade in
//! with a per-card stagger, non-matching cards fade out and are removed from
//! layout one frame later so their exit transition has a chance to start.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

use crate::consts::{FILTER_ALL, FILTER_STAGGER_MS};
use crate::dom;
use crate::error::WireError;

/// What happens to one card when a filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// Fade the card in after `stagger_ms`.
    Show { stagger_ms: u64 },
    /// Fade the card out and drop it from layout.
    Hide,
}

/// Plan the per-card actions for `filter` over `categories`, in card order.
///
/// A card matches when its category equals the token or the token is the
/// `"all"` sentinel; cards without a category only match `"all"`. The k-th
/// match (0-indexed) fades in `k * 100ms` after the call; the stagger index
/// restarts from zero on every plan.
#[must_use]
pub fn plan(filter: &str, categories: &[Option<&str>]) -> Vec<ItemAction> {
    let mut visible: u64 = 0;
    categories
        .iter()
        .map(|category| {
            if filter == FILTER_ALL || *category == Some(filter) {
                let action = ItemAction::Show { stagger_ms: visible * FILTER_STAGGER_MS };
                visible += 1;
                action
            } else {
                ItemAction::Hide
            }
        })
        .collect()
}

/// Apply `filter` to the given cards.
pub fn apply(items: &[Element], filter: &str) {
    let categories: Vec<Option<String>> =
        items.iter().map(|item| item.get_attribute("data-category")).collect();
    let categories: Vec<Option<&str>> = categories.iter().map(Option::as_deref).collect();
    for (item, action) in items.iter().zip(plan(filter, &categories)) {
        match action {
            ItemAction::Show { stagger_ms } => show(item, stagger_ms),
            ItemAction::Hide => hide(item),
        }
    }
}

/// Wire the filter buttons and give every card its baseline transition state.
///
/// # Errors
///
/// Currently infallible; pages without a project grid wire to nothing.
pub fn wire(document: &Document) -> Result<(), WireError> {
    let buttons = dom::query_all(document, ".filter-btn");
    let items = dom::query_all(document, ".project-item");

    for item in &items {
        if let Some(style) = style(item) {
            let _ = style.set_property("transition", "all 0.3s ease");
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    }

    for button in &buttons {
        let all_buttons = buttons.clone();
        let clicked = button.clone();
        let items = items.clone();
        dom::listen(button, "click", move |_event| {
            for other in &all_buttons {
                let _ = other.class_list().remove_1("active");
            }
            let _ = clicked.class_list().add_1("active");

            let token = clicked
                .get_attribute("data-filter")
                .unwrap_or_else(|| FILTER_ALL.to_owned());
            log::debug!("filtering projects by {token:?}");
            apply(&items, &token);
        });
    }
    Ok(())
}

fn show(item: &Element, stagger_ms: u64) {
    let _ = item.class_list().remove_1("hidden");
    if let Some(style) = style(item) {
        let _ = style.set_property("display", "flex");
        let _ = style.set_property("pointer-events", "auto");
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
    }
    let item = item.clone();
    spawn_local(async move {
        sleep(Duration::from_millis(stagger_ms)).await;
        if let Some(style) = style(&item) {
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    });
}

// Two-phase hide: the exit transition starts now, layout removal lands on
// the next frame.
fn hide(item: &Element) {
    let _ = item.class_list().add_1("hidden");
    if let Some(style) = style(item) {
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "scale(0.95)");
        let _ = style.set_property("transition", "opacity 0.2s ease, transform 0.2s ease");
        let _ = style.set_property("pointer-events", "none");
    }
    let item = item.clone();
    dom::on_next_frame(move || {
        if let Some(style) = style(&item) {
            let _ = style.set_property("display", "none");
        }
    });
}

fn style(item: &Element) -> Option<CssStyleDeclaration> {
    item.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}
