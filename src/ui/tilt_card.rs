use leptos::html;
use leptos::prelude::*;

use crate::core::pointer::{PointerState, PointerTracker};
use crate::ui::common::{Badge, BadgeVariant};
use crate::ui::icon::{Glyph, Icon};
use crate::ui::pointer::use_pointer_tracker;

const SHEEN_RADIUS_PX: u32 = 520;
const SHEEN_STOPS: &str = "rgba(0,229,255,0.20), rgba(0,255,138,0.10) 36%, transparent 70%";
const MAX_BULLETS: usize = 3;

fn glyph_class(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Cpu => "h-5 w-5 text-[rgba(0,255,138,0.9)]",
        Glyph::Layers => "h-5 w-5 text-white/90",
        _ => "h-5 w-5 text-[rgba(0,229,255,0.95)]",
    }
}

fn sheen_style(state: PointerState) -> String {
    format!(
        "opacity: {}; background: {};",
        state.glow_opacity(),
        state.sample().radial_gradient(SHEEN_RADIUS_PX, SHEEN_STOPS)
    )
}

/// Service card that tilts toward the pointer and lights up under it.
///
/// The outer shell is measured; only the inner card rotates so the measured
/// box stays stable.
#[component]
pub fn TiltCard(
    title: &'static str,
    description: &'static str,
    glyph: Glyph,
    tag: &'static str,
    bullets: &'static [&'static str],
) -> impl IntoView {
    let shell_ref = NodeRef::<html::Div>::new();
    let pointer = use_pointer_tracker(PointerTracker::tilt());

    let on_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(not(feature = "ssr"))]
        if let Some(element) = shell_ref.get_untracked() {
            pointer.track_event(&element, &ev);
        }
        #[cfg(feature = "ssr")]
        let _ = (ev, shell_ref);
    };

    view! {
        <div
            node_ref=shell_ref
            class="group isolate relative h-full min-h-[380px] overflow-hidden rounded-2xl"
            on:pointermove=on_move
            on:pointerleave=move |_| pointer.pointer_left()
        >
            <div
                class="pointer-events-none absolute inset-0 transition-opacity duration-200"
                style=move || sheen_style(pointer.state())
            ></div>

            <div
                class="relative flex h-full flex-col rounded-2xl border border-white/10 bg-[rgba(10,14,20,0.72)] shadow-[0_0_0_1px_rgba(255,255,255,0.06)] backdrop-blur-md will-change-transform"
                style=move || format!("transform: {};", pointer.transform())
            >
                <div class="p-6 pb-5">
                    <div class="flex items-start gap-4">
                        <div class="grid h-11 w-11 shrink-0 place-items-center rounded-xl border border-white/10 bg-white/5">
                            <Icon glyph=glyph class=glyph_class(glyph) />
                        </div>
                        <div class="min-w-0 flex-1">
                            <div class="flex flex-wrap items-start gap-x-2 gap-y-2">
                                <h3 class="min-w-[12ch] flex-1 text-base font-semibold leading-snug text-white">{title}</h3>
                                <Badge class="shrink-0 max-w-full truncate whitespace-nowrap px-2.5 py-1 text-[11px] leading-none" title=tag>
                                    {tag}
                                </Badge>
                            </div>
                            <p class="mt-2 text-sm leading-relaxed text-white/70">{description}</p>
                        </div>
                    </div>
                    <div class="mt-4 h-px w-full bg-white/10"></div>
                </div>

                <div class="flex flex-1 flex-col px-6 pb-6">
                    <ul class="mt-1 space-y-3 text-sm text-white/80">
                        {bullets
                            .iter()
                            .take(MAX_BULLETS)
                            .map(|bullet| {
                                view! {
                                    <li class="flex items-start gap-2">
                                        <span class="mt-[7px] inline-block h-1.5 w-1.5 shrink-0 rounded-full bg-[rgba(0,229,255,0.9)]"></span>
                                        <span class="leading-relaxed">{*bullet}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="mt-auto flex flex-wrap items-center gap-2 pt-6">
                        <Badge variant=BadgeVariant::Chip>"sob medida"</Badge>
                        <Badge variant=BadgeVariant::Chip>"do zero"</Badge>
                    </div>
                </div>
            </div>
        </div>
    }
}
