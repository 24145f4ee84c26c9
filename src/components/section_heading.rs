use leptos::prelude::*;

/// Section title with the accent bar; optional children render under the title
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-8">
            <div class="h-10 w-2 bg-sky-500 rounded-full"></div>
            <div>
                <h2 class="text-3xl font-bold">{title}</h2>
                {children.map(|children| children())}
            </div>
        </div>
    }
}
