use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Cyan-tinted call-to-action
    Primary,
    /// Bordered glass button
    Secondary,
    /// Borderless translucent button (navigation)
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-[rgba(0,229,255,0.18)] text-white hover:bg-[rgba(0,229,255,0.26)]",
            ButtonVariant::Secondary => "border border-white/10 bg-white/5 text-white hover:bg-white/10",
            ButtonVariant::Ghost => "bg-white/10 text-white hover:bg-white/15",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "h-10 px-4 text-sm",
            ButtonSize::Large => "h-12 px-6 text-base",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-xl font-medium transition";

/// Where an anchor button points once missing destinations are accounted for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorTarget {
    pub href: String,
    pub enabled: bool,
}

impl AnchorTarget {
    /// An empty link degrades to `fallback` (usually a page anchor) and is marked disabled
    pub fn resolve(link: String, fallback: &str) -> Self {
        if !link.is_empty() {
            Self {
                href: link,
                enabled: true,
            }
        } else {
            Self {
                href: fallback.to_string(),
                enabled: false,
            }
        }
    }
}

/// Anchor styled as a button.
///
/// External links open in a new browsing context; disabled links keep their
/// place in the layout but announce `aria-disabled`.
#[component]
pub fn LinkButton(
    target: AnchorTarget,
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    /// Open in a new tab with `noopener`
    #[prop(default = false)]
    external: bool,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("{BUTTON_BASE} {} {}", variant.class(), size.class());
    let mut full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };
    if !target.enabled {
        full_classes.push_str(" pointer-events-none opacity-50");
    }

    let opens_new_context = external && target.enabled;

    view! {
        <a
            href=target.href
            class=full_classes
            aria-disabled=(!target.enabled).then_some("true")
            target=opens_new_context.then_some("_blank")
            rel=opens_new_context.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

/// Styled `<button>` for forms
#[component]
pub fn Button(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    /// `submit` or `button`
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    let full_classes = format!(
        "{BUTTON_BASE} {} {} disabled:pointer-events-none disabled:opacity-50 {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <button
            type=kind
            class=full_classes
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_link_is_enabled() {
        let target = AnchorTarget::resolve("https://wa.me/5511".into(), "#contato");
        assert_eq!(target.href, "https://wa.me/5511");
        assert!(target.enabled);
    }

    #[test]
    fn test_missing_link_falls_back_to_anchor() {
        assert_eq!(
            AnchorTarget::resolve(String::new(), "#contato"),
            AnchorTarget {
                href: "#contato".into(),
                enabled: false
            }
        );
        assert_eq!(AnchorTarget::resolve(String::new(), "#").href, "#");
    }
}
