use leptos::prelude::*;

/// Badge variant types for different use cases
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Translucent label on dark glass
    Subtle,
    /// Fixed-height pill used for small tags inside cards
    Chip,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Subtle => {
                "inline-flex items-center rounded-md border border-white/10 bg-white/5 px-2.5 py-0.5 text-xs font-medium text-white/70 transition-colors hover:bg-white/10"
            }
            BadgeVariant::Chip => {
                "inline-flex h-6 items-center rounded-full border border-white/10 bg-white/5 px-2.5 text-xs text-white/55"
            }
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(default = BadgeVariant::Subtle)] variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Optional title/tooltip
    #[prop(optional)]
    title: Option<&'static str>,
) -> impl IntoView {
    let classes = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <span class=classes title=title>
            {children()}
        </span>
    }
}
