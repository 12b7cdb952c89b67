use leptos::prelude::*;

/// Stroke icons used on the page (24×24 viewBox, `currentColor`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    Code,
    Cpu,
    Layers,
    Sparkles,
    Wand,
    Mail,
    Phone,
    ShieldCheck,
    Rocket,
    Gauge,
    CheckCircle,
    ClipboardCheck,
    Settings,
    Handshake,
}

impl Glyph {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Glyph::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            Glyph::Layers => &[
                "m12 2 9 5-9 5-9-5 9-5z",
                "m3 12 9 5 9-5",
                "m3 17 9 5 9-5",
            ],
            Glyph::Sparkles => &[
                "M9.94 14.06 8 20l-1.94-5.94L0 12l6.06-1.94L8 4l1.94 6.06L16 12z",
                "M20 3v4",
                "M22 5h-4",
            ],
            Glyph::Wand => &[
                "m21.64 3.64-1.28-1.28a1.21 1.21 0 0 0-1.72 0L2.36 18.64a1.21 1.21 0 0 0 0 1.72l1.28 1.28a1.2 1.2 0 0 0 1.72 0L21.64 5.36a1.2 1.2 0 0 0 0-1.72",
                "m14 7 3 3",
                "M5 6v4",
                "M19 14v4",
                "M10 2v2",
                "M7 8H3",
                "M21 16h-4",
                "M11 3H9",
            ],
            Glyph::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-10 6L2 7",
            ],
            Glyph::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Glyph::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
                "m9 12 2 2 4-4",
            ],
            Glyph::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Glyph::Gauge => &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"],
            Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Glyph::ClipboardCheck => &[
                "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
                "m9 14 2 2 4-4",
            ],
            Glyph::Settings => &[
                "M20 7h-9",
                "M14 17H5",
                "M17 14a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
                "M7 4a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            Glyph::Handshake => &[
                "m11 17 2 2a1 1 0 1 0 3-3",
                "m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4",
                "m21 3 1 11h-2",
                "M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3",
                "M3 4h8",
            ],
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    /// Sizing and colour classes
    #[prop(default = "h-5 w-5")]
    class: &'static str,
    /// Inline style, e.g. a per-instance colour
    #[prop(optional)]
    style: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            style=style
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
