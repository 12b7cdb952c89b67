use leptos::html;
use leptos::prelude::*;

use crate::core::pointer::{DEFAULT_MAGNETIC_STRENGTH, PointerTracker};
use crate::ui::pointer::use_pointer_tracker;

/// Wrapper that drifts its content toward the pointer and springs back on exit
#[component]
pub fn Magnetic(
    children: Children,
    /// Travel in pixels across the whole element
    #[prop(default = DEFAULT_MAGNETIC_STRENGTH)]
    strength: f64,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let pointer = use_pointer_tracker(PointerTracker::magnetic(strength));

    let on_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(not(feature = "ssr"))]
        if let Some(element) = node_ref.get_untracked() {
            pointer.track_event(&element, &ev);
        }
        #[cfg(feature = "ssr")]
        let _ = (ev, node_ref);
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("inline-block {class}")
            style=move || format!("transform: {}; transition: transform 140ms ease;", pointer.transform())
            on:pointermove=on_move
            on:pointerleave=move |_| pointer.pointer_left()
        >
            {children()}
        </div>
    }
}
