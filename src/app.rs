use leptos::prelude::*;
use leptos::tachys::html::element::meta;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::seo::{LOCALE, MetaPixel};
use crate::core::site::SiteConfig;
use crate::ui::REVEAL_MARKER_CLASS;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::provide_site_context;

/// Server-side additions to the document head.
///
/// Provided as context by the server; the shell renders without them when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadExtras {
    pub canonical_url: Option<String>,
    pub json_ld: Option<String>,
    pub pixel: Option<MetaPixel>,
}

fn reveal_noscript_style() -> String {
    format!(".{REVEAL_MARKER_CLASS}{{opacity:1 !important;transform:none !important}}")
}

/// `<link rel="canonical">` and the matching `og:url`; `property` has no typed
/// setter on `<meta>`, so it goes through `attr`.
fn canonical_tags(url: String) -> impl IntoView {
    view! {
        <link rel="canonical" href=url.clone()/>
        {meta().attr("property", "og:url").content(url)}
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let extras = use_context::<HeadExtras>().unwrap_or_default();
    let pixel = extras.pixel.clone();
    let pixel_beacon = extras.pixel.map(|pixel| pixel.noscript_src());
    let lang = LOCALE.replace('_', "-");

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {extras.canonical_url.map(canonical_tags)}
                <noscript>
                    <style>{reveal_noscript_style()}</style>
                </noscript>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                {extras.json_ld.map(|json| view! {
                    <script type="application/ld+json" inner_html=json></script>
                })}
                {pixel.map(|pixel| view! {
                    <script id="meta-pixel" inner_html=pixel.script()></script>
                })}
            </head>
            <body>
                {pixel_beacon.map(|src| view! {
                    <noscript>
                        <img alt="" height="1" width="1" style="display:none" src=src/>
                    </noscript>
                })}
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_site_context(SiteConfig::load());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/rvland.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("") view=LandingPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noscript_style_targets_reveal_marker() {
        assert_eq!(
            reveal_noscript_style(),
            ".rv-reveal{opacity:1 !important;transform:none !important}"
        );
    }

    #[test]
    fn test_canonical_url_is_mirrored_to_open_graph() {
        let html = canonical_tags("https://rvland.dev/".to_owned()).to_html();
        assert!(html.contains(r#"rel="canonical""#));
        assert!(html.contains(r#"href="https://rvland.dev/""#));
        assert!(html.contains(r#"property="og:url""#));
        assert!(html.contains(r#"content="https://rvland.dev/""#));
    }
}
