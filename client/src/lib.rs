//! # client
//!
//! Leptos frontend for the developer portfolio site.
//!
//! This crate contains the static site content, the shared layout and card
//! components, the three pages, and the router. It is compiled twice: with
//! `ssr` into the Axum server, and with `hydrate` into the WASM bundle that
//! takes over the server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;

#[cfg(all(test, feature = "ssr"))]
mod test_helpers;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
