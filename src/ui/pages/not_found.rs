//! Not found page component

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::site::SITE_NAME;
use crate::ui::common::{AnchorTarget, LinkButton};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=format!("Página não encontrada | {SITE_NAME}") />
        <Meta name="robots" content="noindex" />

        <main class="flex min-h-screen flex-col items-center justify-center p-4 text-white">
            <div class="text-center">
                <h1 class="mb-4 text-6xl font-semibold">"404"</h1>
                <h2 class="mb-2 text-2xl font-semibold">"Página não encontrada"</h2>
                <p class="mx-auto mb-8 max-w-md text-white/70">
                    "O endereço que você procura não existe ou foi movido."
                </p>
                <LinkButton target=AnchorTarget::resolve("/".to_string(), "/")>
                    "Voltar ao início"
                </LinkButton>
            </div>
        </main>
    }
}
