//! Release Checklist Section
//!
//! Timeline cards with persisted checkboxes.

use leptos::prelude::*;

use super::SectionHeading;
use crate::content::CHECKLIST_STEPS;
use crate::context::use_page_context;
use crate::models::{ChecklistItem, ChecklistStep};

#[component]
pub fn ChecklistSection() -> impl IntoView {
    view! {
        <section id="checklist" class="scroll-mt-20">
            <SectionHeading title="발매 타임라인 체크리스트" />
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                {CHECKLIST_STEPS.iter().map(|step| view! { <StepCard step=*step /> }).collect_view()}
            </div>
        </section>
    }
}

/// One timeline group with a done/total counter
#[component]
fn StepCard(step: ChecklistStep) -> impl IntoView {
    let ctx = use_page_context();
    let progress = move || {
        let done = ctx.checked.with(|state| state.completed(step.items));
        format!("{}/{}", done, step.items.len())
    };

    view! {
        <div class="bg-slate-900 border border-slate-800 p-6 rounded-xl relative">
            <span class="absolute -top-4 -left-4 w-10 h-10 bg-slate-800 rounded-full flex items-center justify-center font-bold text-sky-400 border border-slate-700">
                {step.badge}
            </span>
            <div class="flex items-center justify-between mb-4 pt-2">
                <h4 class="font-bold">{step.title}</h4>
                <span class="text-xs text-slate-500">{progress}</span>
            </div>
            <div class="space-y-3 text-xs text-slate-300">
                {step.items.iter().map(|item| view! { <ChecklistRow item=*item /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ChecklistRow(item: ChecklistItem) -> impl IntoView {
    let ctx = use_page_context();
    let id = item.id;
    let done = move || ctx.is_checked(id);

    let label_class = move || {
        if done() {
            "flex items-center gap-2 cursor-pointer select-none transition-opacity opacity-50"
        } else {
            "flex items-center gap-2 cursor-pointer select-none transition-opacity opacity-100"
        }
    };

    view! {
        <label class=label_class>
            <input
                type="checkbox"
                class="w-4 h-4 rounded border-slate-700 accent-sky-500"
                prop:checked=done
                on:change=move |_| ctx.toggle(id)
            />
            " "
            <span class=move || if done() { "line-through text-slate-500" } else { "" }>
                {item.text}
            </span>
        </label>
    }
}
