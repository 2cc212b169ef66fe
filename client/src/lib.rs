//! # ecoguard-client
//!
//! Leptos + WASM frontend for the EcoGuard environmental-donation platform.
//!
//! This crate contains pages, components, session and form state, wire types,
//! and REST helpers for the external auth and donation-processing services.
//! It is rendered on the server through `ssr` and hydrated in the browser
//! through `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
