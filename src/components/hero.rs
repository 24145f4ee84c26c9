use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative py-20 px-4 text-center overflow-hidden">
            <div class="absolute inset-0 z-0 opacity-20">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-sky-500 rounded-full filter blur-[120px]"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-indigo-600 rounded-full filter blur-[120px]"></div>
            </div>
            <div class="relative z-10 max-w-4xl mx-auto">
                <h1 class="text-5xl md:text-6xl font-extrabold mb-6 tracking-tight">
                    "2026 글로벌 음악 시장" <br/> <span class="gradient-text">"완벽 가이드"</span>
                </h1>
                <p class="text-lg text-slate-400 mb-8 leading-relaxed">
                    "'아티스트 중심' 로열티 구조와 AI 기술 규제 시대, " <br/>
                    "독립 아티스트의 수익 극대화를 위한 DistroKid 활용 전략의 모든 것."
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href="#checklist"
                        class="bg-sky-500 hover:bg-sky-400 text-white font-bold py-3 px-8 rounded-full transition shadow-lg shadow-sky-500/20"
                    >
                        "실행 가이드 시작하기"
                    </a>
                    <a
                        href="#pricing"
                        class="bg-slate-800 hover:bg-slate-700 text-white font-bold py-3 px-8 rounded-full transition border border-slate-700"
                    >
                        "요금제 비교"
                    </a>
                </div>
            </div>
        </header>
    }
}
