use leptos::prelude::*;

use super::{InlineKrw, SectionHeading};
use crate::content::{DOLBY_ATMOS_USD, SPEC_CARDS};
use crate::currency::format_usd;

/// Audio, Canvas, and Motion Art delivery specs
#[component]
pub fn TechSection() -> impl IntoView {
    view! {
        <section id="tech" class="scroll-mt-20">
            <SectionHeading title="기술적 규격 및 시각화" />
            <div class="grid lg:grid-cols-3 gap-8">
                <div class="card p-8">
                    <h3 class="font-bold text-lg mb-4 underline decoration-sky-500">"Audio (WAV)"</h3>
                    <p class="text-sm text-slate-400 mb-4">"최소 16-bit/44.1kHz 필수 [5, 6, 7]"</p>
                    <div class="space-y-4">
                        <div class="flex justify-between border-b border-slate-700 pb-2">
                            <span>"권장 포맷"</span>
                            <span class="text-sky-400">"24-bit / 96kHz"</span>
                        </div>
                        <div class="flex justify-between border-b border-slate-700 pb-2 flex-wrap">
                            <span>"Dolby Atmos"</span>
                            <span class="text-indigo-400 flex flex-col items-end">
                                <span>{format_usd(DOLBY_ATMOS_USD)}</span>
                                <span class="text-xs text-slate-500 font-normal">
                                    <InlineKrw usd=DOLBY_ATMOS_USD /> " (선택)"
                                </span>
                            </span>
                        </div>
                    </div>
                </div>
                {SPEC_CARDS.iter().map(|card| view! {
                    <div class="card p-8">
                        <h3 class=format!("font-bold text-lg mb-4 underline {}", card.decoration)>{card.title}</h3>
                        <p class="text-sm text-slate-400 mb-4">{card.lead}</p>
                        <div class="space-y-2 text-sm">
                            {card.lines.iter().map(|line| view! { <p>"• " {*line}</p> }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
