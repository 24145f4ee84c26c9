use leptos::prelude::*;

use crate::content::NAV_ITEMS;

/// Sticky top bar with section anchors
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 bg-slate-900/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center gap-2">
                        <i class="fas fa-compact-disc text-sky-400 text-2xl"></i>
                        <span class="font-bold text-xl tracking-tight">
                            "DistroKid " <span class="text-sky-400">"2026"</span>
                        </span>
                    </div>
                    <div class="hidden md:flex space-x-8 text-sm font-medium text-slate-300">
                        {NAV_ITEMS.iter().map(|item| view! {
                            <a href=item.href class="hover:text-sky-400 transition">{item.label}</a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
