//! Payout Simulation Section
//!
//! Six-month revenue estimate table; every KRW cell uses the inline formatter.

use leptos::prelude::*;

use super::{InlineKrw, SectionHeading};
use crate::content::{payout_total, PAYOUT_ROWS};
use crate::currency::{format_unit_usd, format_usd};
use crate::models::PayoutRow;

#[component]
pub fn PayoutSection() -> impl IntoView {
    let total = payout_total(PAYOUT_ROWS);

    view! {
        <section id="payout" class="scroll-mt-20">
            <SectionHeading title="수익 시뮬레이션 (초기 6개월)" />
            <div class="overflow-x-auto bg-slate-900 rounded-xl border border-slate-800">
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-800 text-slate-300">
                        <tr>
                            <th class="p-4">"플랫폼"</th>
                            <th class="p-4">"기준 수치"</th>
                            <th class="p-4">"예상 수익 (USD)"</th>
                            <th class="p-4">"핵심 포인트"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-800">
                        {PAYOUT_ROWS.iter().map(|row| view! { <PayoutLine row=*row /> }).collect_view()}
                    </tbody>
                    <tfoot class="bg-slate-800/50">
                        <tr>
                            <td colspan="2" class="p-4 text-right font-bold">"합계 (추정값)"</td>
                            <td class="p-4 text-xl font-bold text-white">
                                <div>{format_usd(total)}</div>
                                <div class="text-sm text-slate-400 font-normal"><InlineKrw usd=total /></div>
                            </td>
                            <td class="p-4"></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
            <div class="mt-4 p-4 bg-slate-900 border border-slate-800 rounded-lg text-xs text-slate-500">
                "* 위 수치는 2026년 평균 시장 단가 기준이며, 청취 국가 및 유료/무료 계정 비율에 따라 크게 달라질 수 있습니다."
            </div>
        </section>
    }
}

#[component]
fn PayoutLine(row: PayoutRow) -> impl IntoView {
    view! {
        <tr>
            <td class="p-4 font-bold">{row.platform}</td>
            <td class="p-4">{row.basis}</td>
            <td class=format!("p-4 {}", row.amount_class)>
                <div>{format_usd(row.amount_usd)}</div>
                <div class="text-xs text-slate-500 font-normal"><InlineKrw usd=row.amount_usd /></div>
            </td>
            <td class="p-4">
                {row.note_lead}
                {row.unit_usd.map(|unit| view! {
                    " " {format_unit_usd(unit)} " "
                    <span class="text-slate-500">"(" <InlineKrw usd=unit /> ")"</span>
                })}
                " " {row.note_tail}
            </td>
        </tr>
    }
}
