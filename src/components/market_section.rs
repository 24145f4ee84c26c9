use leptos::prelude::*;

use super::SectionHeading;
use crate::content::MARKET_CARDS;

/// 2026 industry paradigm cards
#[component]
pub fn MarketSection() -> impl IntoView {
    view! {
        <section id="market" class="scroll-mt-20">
            <SectionHeading title="2026년 산업 패러다임" />
            <div class="grid md:grid-cols-2 gap-8">
                {MARKET_CARDS.iter().map(|card| view! {
                    <div class="card p-8">
                        <h3 class=format!("text-xl font-bold mb-4 {}", card.accent)>
                            <i class=format!("fas {} mr-2", card.icon)></i>
                            {card.title}
                        </h3>
                        <ul class="space-y-3 text-slate-300">
                            {card.bullets.iter().map(|bullet| view! {
                                <li>"• " <strong>{bullet.lead}</strong> " " {bullet.text}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
