//! RVLand Devs - agency landing page
//!
//! Server-rendered with Leptos and Axum, hydrated in the browser for the
//! pointer effects, scroll reveals and contact hand-off.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
