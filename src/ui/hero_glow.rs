use leptos::html;
use leptos::prelude::*;

use crate::core::pointer::{PointerState, PointerTracker};
use crate::ui::pointer::use_pointer_tracker;

const GLOW_RADIUS_PX: u32 = 950;
const GLOW_STOPS: &str = "rgba(0,229,255,0.22), rgba(0,255,138,0.12) 45%, rgba(0,0,0,0) 72%";

fn glow_style(state: PointerState) -> String {
    format!(
        "background: {};",
        state.sample().radial_gradient(GLOW_RADIUS_PX, GLOW_STOPS)
    )
}

/// Pointer-following glow clipped to its parent (the hero card).
///
/// The listener sits on the window so movement over the card's padding still
/// counts, but only positions inside the parent's box are applied.
#[component]
pub fn HeroGlow() -> impl IntoView {
    let root_ref = NodeRef::<html::Div>::new();
    let pointer = use_pointer_tracker(PointerTracker::glow());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::lifecycle::{Subscription, Subscriptions};

        let listeners = StoredValue::new_local(Subscriptions::new());

        Effect::new(move |_| {
            if root_ref.get().is_none() || !listeners.with_value(Subscriptions::is_empty) {
                return;
            }

            let handle = window_event_listener(leptos::ev::pointermove, move |ev| {
                let Some(host) = root_ref
                    .get_untracked()
                    .and_then(|root| root.parent_element())
                else {
                    return;
                };
                pointer.track_event(&host, &ev);
            });
            listeners.update_value(|l| l.push(Subscription::new(move || handle.remove())));
        });

        on_cleanup(move || {
            listeners.try_update_value(Subscriptions::clear);
        });
    }

    view! {
        <div node_ref=root_ref class="pointer-events-none absolute inset-0 overflow-hidden rounded-3xl">
            <div class="absolute inset-0" style=move || glow_style(pointer.state())></div>
            <div class="rv-aurora absolute inset-0 opacity-70"></div>
            <div class="rv-scan absolute inset-0 opacity-20"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-white/[0.06] via-transparent to-transparent"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pointer::PointerSample;

    #[test]
    fn test_initial_glow_is_centred_on_origin() {
        let style = glow_style(PointerState::resting_at(PointerSample::HERO_GLOW_ORIGIN));
        assert!(style.starts_with("background: radial-gradient(950px circle at 55.00% 30.00%,"));
        assert!(style.ends_with("rgba(0,0,0,0) 72%);"));
    }
}
