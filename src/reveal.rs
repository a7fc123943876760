//! Scroll-driven reveals: sections and timeline entries animate in the first
//! time they enter the viewport, and the stats block starts its counters.
//!
//! DESIGN
//! ======
//! A single `IntersectionObserver` feeds crossings into a pure coordinator
//! that owns all per-element state: reveal phases are a one-way
//! `Pending -> Revealed` transition, and the counter trigger is a one-shot
//! per holding element. State lives in the coordinator, not in CSS classes,
//! so repeated observer callbacks cannot re-trigger anything.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::counter;
use crate::dom;
use crate::error::WireError;

/// Index of a tracked element, assigned in observation order at wiring.
pub type ElementKey = usize;

/// Reveal lifecycle of one tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Pending,
    Revealed,
}

/// One viewport crossing reported for a tracked element.
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    pub key: ElementKey,
    pub intersecting: bool,
    /// The element carries the `section-reveal` marker class.
    pub section_reveal: bool,
    /// The element carries the `timeline-item` marker class.
    pub timeline_item: bool,
    /// The element contains at least one counter.
    pub holds_counter: bool,
}

/// Presentation change requested by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the `revealed` class to the element.
    Reveal(ElementKey),
    /// Add the `animate` class to the element.
    Animate(ElementKey),
    /// Start the counter ramps.
    StartCounters,
}

/// Tracks reveal phases and the one-shot counter trigger per element.
#[derive(Debug, Default)]
pub struct RevealCoordinator {
    phases: HashMap<ElementKey, Phase>,
    counted: HashSet<ElementKey>,
}

impl RevealCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of a tracked element.
    #[must_use]
    pub fn phase(&self, key: ElementKey) -> Phase {
        self.phases.get(&key).copied().unwrap_or_default()
    }

    /// Feed one crossing through the state machine and collect the
    /// presentation changes it causes. Crossings out of the viewport and
    /// repeats of an already-revealed element cause none.
    pub fn observe(&mut self, crossing: Crossing) -> Vec<RevealAction> {
        let mut actions = Vec::new();
        if !crossing.intersecting {
            return actions;
        }
        if self.phase(crossing.key) == Phase::Pending {
            self.phases.insert(crossing.key, Phase::Revealed);
            if crossing.section_reveal {
                actions.push(RevealAction::Reveal(crossing.key));
            }
            if crossing.timeline_item {
                actions.push(RevealAction::Animate(crossing.key));
            }
        }
        if crossing.holds_counter && self.counted.insert(crossing.key) {
            actions.push(RevealAction::StartCounters);
        }
        actions
    }
}

/// Observe every revealable element and the stats container.
///
/// # Errors
///
/// Fails when the observer cannot be constructed.
pub fn wire(document: &Document) -> Result<(), WireError> {
    let mut targets = dom::query_all(document, ".section-reveal");
    targets.extend(dom::query_all(document, ".timeline-item"));
    if let Some(container) = stats_container(document)
        && !targets.contains(&container)
    {
        targets.push(container);
    }
    if targets.is_empty() {
        return Ok(());
    }

    let coordinator = Rc::new(RefCell::new(RevealCoordinator::new()));
    let doc = document.clone();
    let observed = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                let crossing = Crossing {
                    key,
                    intersecting: entry.is_intersecting(),
                    section_reveal: target.class_list().contains("section-reveal"),
                    timeline_item: target.class_list().contains("timeline-item"),
                    holds_counter: target.query_selector(".counter").ok().flatten().is_some(),
                };
                for action in coordinator.borrow_mut().observe(crossing) {
                    match action {
                        RevealAction::Reveal(key) => {
                            let _ = observed[key].class_list().add_1("revealed");
                        }
                        RevealAction::Animate(key) => {
                            let _ = observed[key].class_list().add_1("animate");
                        }
                        RevealAction::StartCounters => counter::animate_all(&doc),
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| WireError::ObserverUnavailable)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

/// The container wrapping the stats counters, found through the first counter.
fn stats_container(document: &Document) -> Option<Element> {
    let counter = document.query_selector(".container .row .counter").ok().flatten()?;
    counter.closest(".container").ok().flatten()
}
