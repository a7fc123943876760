//! Contact form lifecycle: intercept submission, delegate to the email
//! widget, and surface the outcome.
//!
//! ERROR HANDLING
//! ==============
//! Delivery failure is a user-visible notification, not a crash, and the
//! form fields are kept so the visitor can retry. The busy-state UI is
//! restored on every outcome path, so the submit control can never be left
//! disabled.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement};

use crate::error::WireError;
use crate::{dom, email, notify};

/// Submission lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

impl FormPhase {
    /// Enter the submitting state. Returns `false` when a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Return to idle. Runs on every outcome path.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}

/// Terminal result of one delegated send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    Failed,
}

impl SendOutcome {
    /// Banner flavor for this outcome.
    #[must_use]
    pub fn kind(self) -> notify::Kind {
        match self {
            Self::Delivered => notify::Kind::Success,
            Self::Failed => notify::Kind::Error,
        }
    }

    /// Banner message for this outcome.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Delivered => "Message sent successfully! Thank you for getting in touch.",
            Self::Failed => "Something went wrong. Please try again later.",
        }
    }

    /// Whether the form fields are cleared. Kept on failure for retry.
    #[must_use]
    pub fn resets_form(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Wire the submit handler.
///
/// # Errors
///
/// Fails fast when the email widget is not loaded or `#contact-form` is
/// missing; the rest of the page is unaffected.
pub fn wire(document: &Document) -> Result<(), WireError> {
    if !email::widget_available() {
        return Err(WireError::EmailWidgetUnavailable);
    }
    email::init();

    let form: HtmlFormElement = dom::by_id(document, "contact-form")?;
    let _ = notify::ensure_container(document);

    let phase = Rc::new(RefCell::new(FormPhase::default()));
    let doc = document.clone();
    let form_handle = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        if !phase.borrow_mut().begin_submit() {
            return;
        }

        let ui = BusyUi::collect(&form_handle);
        ui.engage();

        let doc = doc.clone();
        let form = form_handle.clone();
        let phase = Rc::clone(&phase);
        spawn_local(async move {
            let outcome = match email::send_form(&form).await {
                Ok(response) => {
                    log::debug!("email delivered: {response:?}");
                    SendOutcome::Delivered
                }
                Err(err) => {
                    log::error!("email delivery failed: {err:?}");
                    SendOutcome::Failed
                }
            };
            notify::show(&doc, outcome.kind(), outcome.message());
            if outcome.resets_form() {
                form.reset();
            }
            // Runs on both outcome paths.
            ui.release();
            phase.borrow_mut().finish();
        });
    });
    Ok(())
}

/// Handles to the submit control's busy-state pieces. Each is optional; a
/// form without them just skips that part of the busy presentation.
struct BusyUi {
    button: Option<HtmlButtonElement>,
    text: Option<Element>,
    loading: Option<Element>,
}

impl BusyUi {
    fn collect(form: &HtmlFormElement) -> Self {
        let button = form
            .query_selector("button[type='submit']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let text = button.as_ref().and_then(|b| b.query_selector(".btn-text").ok().flatten());
        let loading = button.as_ref().and_then(|b| b.query_selector(".loading").ok().flatten());
        Self { button, text, loading }
    }

    fn engage(&self) {
        if let (Some(text), Some(loading)) = (&self.text, &self.loading) {
            let _ = loading.class_list().remove_1("d-none");
            let _ = text.class_list().add_1("opacity-0");
        }
        if let Some(button) = &self.button {
            button.set_disabled(true);
        }
    }

    fn release(&self) {
        if let (Some(text), Some(loading)) = (&self.text, &self.loading) {
            let _ = loading.class_list().add_1("d-none");
            let _ = text.class_list().remove_1("opacity-0");
        }
        if let Some(button) = &self.button {
            button.set_disabled(false);
        }
    }
}
