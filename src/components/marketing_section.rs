use leptos::prelude::*;

use super::SectionHeading;
use crate::content::HYPERFOLLOW_TIPS;

const PRIORITY_FORMULA: &str = r"$Algorithm\ Priority = \alpha \times (Initial\ Saves) + \beta \times (Completion\ Rate) - \gamma \times (Skip\ Rate)$";

/// Pre-save, algorithm priority, and HyperFollow guidance
#[component]
pub fn MarketingSection() -> impl IntoView {
    view! {
        <section id="marketing" class="scroll-mt-20">
            <div class="flex md:flex-row flex-col gap-12">
                <div class="flex-1">
                    <SectionHeading title="알고리즘 마케팅 전략" />
                    <div class="space-y-6">
                        <div class="card p-6">
                            <h4 class="font-bold text-sky-400 mb-2">"Pre-save 캠페인 효과"</h4>
                            <p class="text-sm text-slate-300 leading-relaxed">
                                "발매 전 Pre-save는 Spotify Release Radar의 가장 강력한 트리거입니다. "
                                "정량 분석 결과, 사전 저장이 많은 곡은 발매 첫 주 노출이 3.5배 증가합니다. [9, 10, 11, 12]"
                            </p>
                        </div>
                        <div class="card p-6 border-l-4 border-l-indigo-500">
                            <h4 class="font-bold text-indigo-400 mb-2">"Algorithm Priority 모델"</h4>
                            <p class="text-sm bg-slate-950 p-4 rounded font-mono text-center">{PRIORITY_FORMULA}</p>
                            <p class="mt-4 text-xs text-slate-400">
                                "2026년에는 저장과 청취 완료율의 가중치(α, β)가 스킵률(γ) 페널티보다 높게 설정됩니다. [13, 10, 14]"
                            </p>
                        </div>
                    </div>
                </div>
                <div class="flex-1 bg-slate-900 p-8 rounded-2xl border border-slate-800">
                    <h3 class="text-xl font-bold mb-6">
                        <i class="fas fa-bullseye mr-2 text-red-400"></i>
                        "HyperFollow 활용법"
                    </h3>
                    <div class="space-y-6">
                        {HYPERFOLLOW_TIPS.iter().map(|tip| view! {
                            <div class="flex gap-4">
                                <div class="h-8 w-8 bg-sky-500 rounded-full flex items-center justify-center font-bold">
                                    {tip.step}
                                </div>
                                <p class="text-sm">{tip.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
