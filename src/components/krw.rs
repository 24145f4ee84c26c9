//! Won Price Components
//!
//! Reactive KRW renderings of USD amounts. Both show a placeholder until the
//! exchange rate resolves.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::currency::{format_block, format_inline, BLOCK_PENDING_TEXT};

/// Prominent plan price: "약 ₩36,240 (오늘 시세)"
#[component]
pub fn PlanPrice(usd: f64) -> impl IntoView {
    let ctx = use_page_context();

    move || match ctx.krw_rate() {
        None => view! {
            <span class="text-xs text-slate-500 animate-pulse">{BLOCK_PENDING_TEXT}</span>
        }
        .into_any(),
        Some(rate) => view! {
            <div class="flex items-center gap-2 mt-1">
                <span class="text-lg font-bold text-sky-400">{format_block(usd, Some(rate))}</span>
                <span class="text-xs text-slate-500 font-normal">"(오늘 시세)"</span>
            </div>
        }
        .into_any(),
    }
}

/// Inline won amount for table cells and per-unit rates
#[component]
pub fn InlineKrw(usd: f64) -> impl IntoView {
    let ctx = use_page_context();
    move || format_inline(usd, ctx.krw_rate())
}
