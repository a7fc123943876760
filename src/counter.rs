//! Count-up animation for stat counters.
//!
//! Each counter advances in a fixed number of steps toward its `data-target`
//! value, so a 3s ramp looks the same whether the target is 12 or 12000. The
//! displayed value is always an integer, never decreases, and never overshoots
//! the target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::consts::{COUNTER_STEPS, COUNTER_TICK_MS};
use crate::dom;

/// The tick sequence for one counter: `ceil(k * target / steps)` for
/// `k = 1..=steps`, landing exactly on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterPlan {
    target: u64,
}

impl CounterPlan {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    /// Parse a plan from a `data-target` attribute value. A missing or
    /// non-numeric target yields no plan and the counter is left untouched.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| raw.trim().parse::<u64>().ok()).map(Self::new)
    }

    #[must_use]
    pub fn target(self) -> u64 {
        self.target
    }

    /// Displayed value after `step` ticks (1-based). Clamped to the target
    /// from step [`COUNTER_STEPS`] onward.
    #[must_use]
    pub fn value_at(self, step: u64) -> u64 {
        let step = step.min(COUNTER_STEPS);
        (step * self.target).div_ceil(COUNTER_STEPS)
    }

    /// The full tick sequence, one displayed value per timer tick.
    pub fn ticks(self) -> impl Iterator<Item = u64> {
        (1..=COUNTER_STEPS).map(move |step| self.value_at(step))
    }
}

/// Start the ramp on every `.counter` element on the page.
///
/// No cancellation: re-invocation while a ramp is running would race it, so
/// callers gate this behind the reveal coordinator's one-shot trigger.
pub fn animate_all(document: &Document) {
    for counter in dom::query_all(document, ".counter") {
        let Some(plan) = CounterPlan::from_attr(counter.get_attribute("data-target").as_deref())
        else {
            continue;
        };
        spawn_local(animate(counter, plan));
    }
}

async fn animate(counter: Element, plan: CounterPlan) {
    for value in plan.ticks() {
        counter.set_text_content(Some(&value.to_string()));
        sleep(Duration::from_millis(COUNTER_TICK_MS)).await;
    }
    counter.set_text_content(Some(&plan.target().to_string()));
}
