//! Pricing Section
//!
//! Plan cards with live KRW conversions and the applied-rate caption.

use leptos::prelude::*;

use super::{PlanPrice, SectionHeading};
use crate::content::PRICING_PLANS;
use crate::context::use_page_context;
use crate::currency::{format_rate, format_usd};
use crate::models::{FeatureStyle, PlanFeature, PricingPlan};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="scroll-mt-20">
            <SectionHeading title="전략적 요금제 분석">
                <RateCaption />
            </SectionHeading>
            <div class="grid md:grid-cols-3 gap-6">
                {PRICING_PLANS.iter().map(|plan| view! { <PlanCard plan=*plan /> }).collect_view()}
            </div>
        </section>
    }
}

/// "적용 환율: 1 USD = 1,452.37 KRW (2026. 1. 15. 기준)", hidden while loading
#[component]
fn RateCaption() -> impl IntoView {
    let ctx = use_page_context();

    move || {
        let state = ctx.rate.get();
        state.rate().map(|rate| {
            let caption = format!(
                "적용 환율: 1 USD = {} KRW ({} 기준)",
                format_rate(rate),
                state.as_of().unwrap_or_default()
            );
            view! {
                <p class="text-xs text-slate-400 mt-2">
                    <i class="fas fa-coins mr-1"></i>
                    {caption}
                </p>
            }
        })
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let card_class = if plan.ribbon.is_some() {
        "card p-6 flex flex-col border-sky-500/50 bg-sky-500/5 shadow-xl shadow-sky-500/10 relative"
    } else {
        "card p-6 flex flex-col border-slate-700"
    };

    view! {
        <div class=card_class>
            {plan.ribbon.map(|ribbon| view! {
                <div class="bg-sky-500 text-white text-[10px] font-bold px-2 py-1 rounded absolute -top-3 right-6">
                    {ribbon}
                </div>
            })}
            <h3 class="text-lg font-bold mb-2">{plan.name}</h3>
            <div class="mb-4">
                <p class="text-3xl font-bold">
                    {format_usd(plan.price_usd)} " "
                    <span class="text-sm font-normal text-slate-400">"/연간"</span>
                </p>
                <PlanPrice usd=plan.price_usd />
            </div>
            <p class="text-sm text-slate-400 mb-6 font-medium">{plan.tagline}</p>
            <ul class="text-sm space-y-3 mb-8 flex-grow">
                {plan.features.iter().map(|feature| view! { <FeatureLine feature=*feature /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn FeatureLine(feature: PlanFeature) -> impl IntoView {
    let (line_class, icon_class) = match feature.style {
        FeatureStyle::Included => ("flex items-center".to_string(), "fas fa-check text-green-500 mr-2"),
        FeatureStyle::Highlight(extra) => (format!("flex items-center {}", extra), "fas fa-check mr-2"),
        FeatureStyle::Excluded => ("flex items-center text-slate-500".to_string(), "fas fa-times mr-2"),
    };

    view! {
        <li class=line_class>
            <i class=icon_class></i>
            " " {feature.text}
        </li>
    }
}
