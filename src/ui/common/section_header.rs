use leptos::prelude::*;

/// Section title with subtitle and an optional right-hand slot (hidden on mobile)
#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional, into)] right: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="relative z-30 mb-8 flex items-end justify-between gap-6">
            <div class="max-w-2xl">
                <h2 class="text-2xl font-semibold md:text-3xl">{title}</h2>
                <p class="mt-2 text-white/70">{subtitle}</p>
            </div>
            {right.map(|right| view! { <div class="hidden shrink-0 md:block">{right.run()}</div> })}
        </div>
    }
}
