// lib.rs - Root module for the service_site library
//
// The web application lives under `web_app`; `fixtures` holds the
// database table definitions shared by the server seed step and the
// DB-backed integration tests.

/// The fixtures module contains reusable table definitions and seed data
pub mod fixtures;

/// Leptos web application (components, pages, server functions)
pub mod web_app;

/// WASM entry point: hydrates the server-rendered markup
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
