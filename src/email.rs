//! Bindings to the page-global EmailJS widget.
//!
//! The widget is a third-party script loaded before this module; all we rely
//! on is `emailjs.init` plus `emailjs.sendForm` returning a promise that
//! resolves on delivery and rejects on failure. Callers must probe
//! [`widget_available`] before touching the bindings.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlFormElement;

use crate::consts::{EMAIL_PUBLIC_KEY, EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init)]
    fn emailjs_init(public_key: &str);

    #[wasm_bindgen(js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &HtmlFormElement,
    ) -> js_sys::Promise;
}

/// Whether the widget script made it onto the page.
#[must_use]
pub fn widget_available() -> bool {
    js_sys::Reflect::has(js_sys::global().as_ref(), &JsValue::from_str("emailjs"))
        .unwrap_or(false)
}

/// Register the public client key with the widget.
pub fn init() {
    emailjs_init(EMAIL_PUBLIC_KEY);
}

/// Deliver `form`'s fields through the configured service and template.
///
/// # Errors
///
/// Returns the widget's rejection value when delivery fails.
pub async fn send_form(form: &HtmlFormElement) -> Result<JsValue, JsValue> {
    JsFuture::from(emailjs_send_form(EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID, form)).await
}
