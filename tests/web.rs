//! Browser integration tests: run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use folio::{consts, contact, counter, filter, notify, particles, theme};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a fresh element to the body; caller removes it when done.
fn fixture(document: &Document, tag: &str, id: &str) -> Element {
    let element = document.create_element(tag).unwrap();
    if !id.is_empty() {
        element.set_id(id);
    }
    document.body().unwrap().append_child(&element).unwrap();
    element
}

// --- particles ---

#[wasm_bindgen_test]
fn particle_field_has_fixed_population() {
    let document = document();
    let container = fixture(&document, "div", "particles");

    particles::create(&document).unwrap();
    assert_eq!(container.child_element_count() as usize, consts::PARTICLE_COUNT);

    // Regeneration replaces, never accumulates.
    particles::recreate(&document).unwrap();
    particles::recreate(&document).unwrap();
    assert_eq!(container.child_element_count() as usize, consts::PARTICLE_COUNT);

    container.remove();
}

#[wasm_bindgen_test]
fn particles_carry_randomized_inline_styles() {
    let document = document();
    let container = fixture(&document, "div", "particles");

    particles::create(&document).unwrap();
    let first: HtmlElement = container.first_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(first.class_name(), "particle");
    assert!(!first.style().get_property_value("width").unwrap().is_empty());
    assert!(!first.style().get_property_value("animation-duration").unwrap().is_empty());

    container.remove();
}

// --- theme ---

#[wasm_bindgen_test]
fn theme_toggle_flips_attribute_and_persists() {
    let document = document();
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(consts::THEME_STORAGE_KEY).unwrap();

    let toggle = fixture(&document, "button", "themeToggle");
    let icon = fixture(&document, "i", "themeIcon");
    let container = fixture(&document, "div", "particles");

    theme::wire(&document).unwrap();
    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(icon.get_attribute("class").as_deref(), Some("fas fa-sun"));

    let button: HtmlElement = toggle.clone().dyn_into().unwrap();
    button.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(storage.get_item(consts::THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(icon.get_attribute("class").as_deref(), Some("fas fa-moon"));
    // Regenerated alongside the palette swap.
    assert_eq!(container.child_element_count() as usize, consts::PARTICLE_COUNT);

    button.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(storage.get_item(consts::THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));

    storage.remove_item(consts::THEME_STORAGE_KEY).unwrap();
    toggle.remove();
    icon.remove();
    container.remove();
}

// --- filter ---

#[wasm_bindgen_test]
async fn filter_hides_non_matching_cards() {
    let document = document();
    let grid = fixture(&document, "div", "");
    let mut cards = Vec::new();
    for category in ["web", "ml", "web"] {
        let card = document.create_element("div").unwrap();
        card.set_class_name("project-item");
        card.set_attribute("data-category", category).unwrap();
        grid.append_child(&card).unwrap();
        cards.push(card);
    }

    filter::apply(&cards, "web");
    assert!(!cards[0].class_list().contains("hidden"));
    assert!(cards[1].class_list().contains("hidden"));
    assert!(!cards[2].class_list().contains("hidden"));

    let hidden: HtmlElement = cards[1].clone().dyn_into().unwrap();
    assert_eq!(hidden.style().get_property_value("pointer-events").unwrap(), "none");

    // Display suppression lands on the next frame.
    sleep(Duration::from_millis(50)).await;
    assert_eq!(hidden.style().get_property_value("display").unwrap(), "none");

    // Staggered fade-in completes for both matches.
    sleep(Duration::from_millis(250)).await;
    for key in [0, 2] {
        let shown: HtmlElement = cards[key].clone().dyn_into().unwrap();
        assert_eq!(shown.style().get_property_value("opacity").unwrap(), "1");
        assert_eq!(shown.style().get_property_value("display").unwrap(), "flex");
    }

    grid.remove();
}

#[wasm_bindgen_test]
async fn refiltering_restores_hidden_cards() {
    let document = document();
    let grid = fixture(&document, "div", "");
    let mut cards = Vec::new();
    for category in ["web", "ml"] {
        let card = document.create_element("div").unwrap();
        card.set_class_name("project-item");
        card.set_attribute("data-category", category).unwrap();
        grid.append_child(&card).unwrap();
        cards.push(card);
    }

    filter::apply(&cards, "web");
    sleep(Duration::from_millis(150)).await;
    filter::apply(&cards, "all");
    sleep(Duration::from_millis(300)).await;

    for card in &cards {
        assert!(!card.class_list().contains("hidden"));
        let shown: HtmlElement = card.clone().dyn_into().unwrap();
        assert_eq!(shown.style().get_property_value("display").unwrap(), "flex");
        assert_eq!(shown.style().get_property_value("opacity").unwrap(), "1");
    }

    grid.remove();
}

// --- counters ---

#[wasm_bindgen_test]
async fn counter_ramp_lands_exactly_on_target() {
    let document = document();
    let stat = fixture(&document, "span", "");
    stat.set_class_name("counter");
    stat.set_attribute("data-target", "42").unwrap();

    counter::animate_all(&document);
    // 100 steps x 30ms, plus slack for timer jitter.
    sleep(Duration::from_millis(3500)).await;
    assert_eq!(stat.text_content().as_deref(), Some("42"));

    stat.remove();
}

// --- contact form ---

/// Build a contact form with the busy-state submit control and one field.
fn contact_fixture(document: &Document) -> (HtmlFormElement, HtmlInputElement, HtmlButtonElement) {
    let form: HtmlFormElement =
        fixture(document, "form", "contact-form").dyn_into().unwrap();

    let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
    input.set_name("message");
    form.append_child(&input).unwrap();

    let button: HtmlButtonElement =
        document.create_element("button").unwrap().dyn_into().unwrap();
    button.set_type("submit");
    button.set_inner_html(r#"<span class="btn-text">Send</span><span class="loading d-none"></span>"#);
    form.append_child(&button).unwrap();

    (form, input, button)
}

#[wasm_bindgen_test]
async fn successful_send_notifies_and_clears_the_form() {
    let document = document();
    js_sys::eval(
        "window.emailjs = { init() {}, \
         sendForm() { return Promise.resolve({ status: 200, text: 'OK' }); } };",
    )
    .unwrap();

    let (form, input, button) = contact_fixture(&document);
    contact::wire(&document).unwrap();

    input.set_value("hello there");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    assert!(button.disabled());

    sleep(Duration::from_millis(200)).await;
    let container = document.get_element_by_id("notification-container").unwrap();
    let banner = container.last_element_child().unwrap();
    assert!(banner.class_list().contains("alert-success"));
    assert_eq!(input.value(), "");
    assert!(!button.disabled());

    banner.remove();
    form.remove();
}

#[wasm_bindgen_test]
async fn failed_send_notifies_and_keeps_the_fields() {
    let document = document();
    js_sys::eval(
        "window.emailjs = { init() {}, \
         sendForm() { return Promise.reject(new Error('delivery refused')); } };",
    )
    .unwrap();

    let (form, input, button) = contact_fixture(&document);
    contact::wire(&document).unwrap();

    input.set_value("hello again");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    sleep(Duration::from_millis(200)).await;
    let container = document.get_element_by_id("notification-container").unwrap();
    let banner = container.last_element_child().unwrap();
    assert!(banner.class_list().contains("alert-danger"));
    assert_eq!(input.value(), "hello again");
    assert!(!button.disabled());

    banner.remove();
    form.remove();
}

// --- notifications ---

#[wasm_bindgen_test]
fn banner_is_appended_with_kind_styling() {
    let document = document();

    notify::show(&document, notify::Kind::Success, "Message sent");
    let container = document.get_element_by_id("notification-container").unwrap();
    let banner = container.last_element_child().unwrap();
    assert!(banner.class_list().contains("alert-success"));
    assert!(banner.class_list().contains("show"));
    assert!(banner.id().starts_with("notification-"));
    assert!(banner.inner_html().contains("Message sent"));

    banner.remove();
}

#[wasm_bindgen_test]
async fn banner_auto_dismisses_after_grace_period() {
    let document = document();

    notify::show(&document, notify::Kind::Error, "Something went wrong");
    let container = document.get_element_by_id("notification-container").unwrap();
    let banner = container.last_element_child().unwrap();
    assert!(banner.is_connected());

    sleep(Duration::from_millis(
        consts::NOTIFY_DISMISS_MS + consts::NOTIFY_EXIT_MS + 200,
    ))
    .await;
    assert!(!banner.is_connected());
}
