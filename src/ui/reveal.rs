use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::{RevealState, transition_delay_style};

/// Marker class used by the `<noscript>` fallback to show content without scripts
pub const REVEAL_MARKER_CLASS: &str = "rv-reveal";

/// Fade-and-rise entrance, triggered once when 12% of the block is visible
#[component]
pub fn Reveal(
    children: Children,
    /// Transition delay in milliseconds (does not delay detection)
    #[prop(default = 0)]
    delay: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Pending);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::reveal::{RevealController, Visibility};
        use crate::ui::dom::observe_visibility;

        let controller = StoredValue::new_local(RevealController::new(delay));

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if !controller.with_value(RevealController::wants_observation) {
                return;
            }

            let threshold = controller.with_value(RevealController::threshold);
            let observation = observe_visibility(&element, threshold, move |visibility| {
                let fired = controller
                    .try_update_value(|c| c.on_visibility(visibility))
                    .unwrap_or(false);
                if fired {
                    state.set(RevealState::Revealed);
                }
            });

            match observation {
                Some(observation) => controller.update_value(|c| c.attach(observation)),
                None => {
                    // No observer support: show the content rather than hide it forever
                    controller.update_value(|c| {
                        c.on_visibility(Visibility::new(true, 1.0));
                    });
                    state.set(RevealState::Revealed);
                }
            }
        });

        on_cleanup(move || {
            controller.try_update_value(RevealController::teardown);
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=move || format!("{REVEAL_MARKER_CLASS} {}", state.get().classes())
            style=transition_delay_style(delay)
        >
            {children()}
        </div>
    }
}
