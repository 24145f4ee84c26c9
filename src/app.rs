//! Strategy Guide App
//!
//! Top-level page: owns the exchange rate and checklist state and lays out
//! the sections.

use kv_storage::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::checklist::CheckedState;
use crate::components::{
    ChecklistSection, Footer, Hero, MarketSection, MarketingSection, NavBar, PayoutSection,
    PricingSection, TechSection,
};
use crate::context::PageContext;
use crate::models::RateState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (rate, set_rate) = signal(RateState::Pending);
    let (checked, set_checked) = signal(CheckedState::load(&LocalStorage));

    let on_toggle = Callback::new(move |id: &'static str| {
        set_checked.update(|state| *state = state.toggle_persisted(id, &LocalStorage));
    });

    // Provide context to all children
    provide_context(PageContext::new(rate, checked, on_toggle));

    // Load the exchange rate once on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading exchange rate".into());
        spawn_local(async move {
            set_rate.set(api::load_exchange_rate().await);
        });
    });

    view! {
        <div class="bg-slate-950 text-slate-50 min-h-screen font-sans selection:bg-sky-500 selection:text-white">
            <NavBar />
            <Hero />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-24 pb-20">
                <MarketSection />
                <PricingSection />
                <TechSection />
                <PayoutSection />
                <MarketingSection />
                <ChecklistSection />
            </main>

            <Footer />
        </div>
    }
}
