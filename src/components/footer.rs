use leptos::prelude::*;

use crate::config::PACKAGE_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 border-t border-slate-800 py-12 px-4">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-8">
                <div class="text-slate-400 text-sm">
                    <p>
                        "© 2026 DistroKid Strategy Report. " <br/>
                        "본 가이드는 실제 2026년 1월 음악 시장 환경 리서치를 바탕으로 제작되었습니다."
                    </p>
                </div>
                <div>
                    <a
                        href=PACKAGE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-yellow-400 hover:bg-yellow-300 text-slate-900 font-bold py-2 px-6 rounded-full transition flex items-center gap-2"
                    >
                        <span>"SUNO 패키지 구매"</span>
                        <i class="fas fa-external-link-alt text-sm"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
