//! Glass card primitives

use leptos::prelude::*;

const CARD_BASE: &str = "rounded-2xl border border-white/10 backdrop-blur-md";

fn join(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn Card(
    children: Children,
    /// Background and layout classes; defaults to the translucent surface
    #[prop(default = "bg-white/5")]
    class: &'static str,
) -> impl IntoView {
    view! { <div class=join(CARD_BASE, class)>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <div class=join("flex flex-col gap-1.5 p-6", class)>{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <h3 class=join("font-semibold leading-none tracking-tight text-white", class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(children: Children, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <p class=join("text-sm text-white/70", class)>{children()}</p> }
}

#[component]
pub fn CardContent(children: Children, #[prop(default = "p-6 pt-0")] class: &'static str) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}
