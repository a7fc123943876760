//! Decorative particle field behind the hero section.
//!
//! Particles are pure decoration: each one is a `div.particle` with randomly
//! chosen size, position, and animation timing. The field is rebuilt wholesale
//! on theme change so the CSS palette swap applies to fresh elements.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::{
    PARTICLE_COUNT, PARTICLE_DELAY_MAX_S, PARTICLE_DURATION_MIN_S, PARTICLE_DURATION_SPAN_S,
    PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_SPAN_PX,
};
use crate::dom;
use crate::error::WireError;

/// Parameters for a single particle, sampled independently per element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    /// Sample one particle from a uniform `[0, 1)` source.
    pub fn sample(rng: &mut dyn FnMut() -> f64) -> Self {
        Self {
            size_px: rng() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX,
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            delay_s: rng() * PARTICLE_DELAY_MAX_S,
            duration_s: rng() * PARTICLE_DURATION_SPAN_S + PARTICLE_DURATION_MIN_S,
        }
    }
}

/// Sample a full field of [`PARTICLE_COUNT`] particles.
#[must_use]
pub fn field(rng: &mut dyn FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..PARTICLE_COUNT).map(|_| ParticleSpec::sample(rng)).collect()
}

/// Append a freshly sampled field to `#particles`.
///
/// # Errors
///
/// Fails when the container element is missing.
pub fn create(document: &Document) -> Result<(), WireError> {
    let container: Element = dom::by_id(document, "particles")?;
    let mut rng = js_sys::Math::random;
    for spec in field(&mut rng) {
        if let Some(particle) = build(document, spec) {
            let _ = container.append_child(&particle);
        }
    }
    Ok(())
}

/// Clear the container and rebuild the field; always leaves exactly
/// [`PARTICLE_COUNT`] particles behind.
///
/// # Errors
///
/// Fails when the container element is missing.
pub fn recreate(document: &Document) -> Result<(), WireError> {
    let container: Element = dom::by_id(document, "particles")?;
    container.set_inner_html("");
    create(document)
}

/// Initial field creation at page load.
///
/// # Errors
///
/// Fails when the container element is missing.
pub fn wire(document: &Document) -> Result<(), WireError> {
    create(document)
}

fn build(document: &Document, spec: ParticleSpec) -> Option<HtmlElement> {
    let particle: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    particle.set_class_name("particle");
    let style = particle.style();
    let _ = style.set_property("width", &format!("{}px", spec.size_px));
    let _ = style.set_property("height", &format!("{}px", spec.size_px));
    let _ = style.set_property("left", &format!("{}%", spec.left_pct));
    let _ = style.set_property("top", &format!("{}%", spec.top_pct));
    let _ = style.set_property("animation-delay", &format!("{}s", spec.delay_s));
    let _ = style.set_property("animation-duration", &format!("{}s", spec.duration_s));
    Some(particle)
}
