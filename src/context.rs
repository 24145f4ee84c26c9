//! Page Context
//!
//! Read-only page state plus the checklist toggle, provided via Leptos Context API.

use leptos::prelude::*;

use crate::checklist::CheckedState;
use crate::models::RateState;

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Exchange-rate load state
    pub rate: ReadSignal<RateState>,
    /// Checklist completion state
    pub checked: ReadSignal<CheckedState>,
    /// Flips one checklist item and persists the result
    on_toggle: Callback<&'static str>,
}

impl PageContext {
    pub fn new(
        rate: ReadSignal<RateState>,
        checked: ReadSignal<CheckedState>,
        on_toggle: Callback<&'static str>,
    ) -> Self {
        Self { rate, checked, on_toggle }
    }

    /// Current USD→KRW multiplier, None while loading
    pub fn krw_rate(&self) -> Option<f64> {
        self.rate.with(|state| state.rate())
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.with(|state| state.is_checked(id))
    }

    /// Toggle a checklist item
    pub fn toggle(&self, id: &'static str) {
        self.on_toggle.run(id);
    }
}

/// Get the page context
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
