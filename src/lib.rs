//! # nycfood-client
//!
//! Leptos + WASM frontend for the NYC Restaurant Week food-query
//! service. Renders a single-page form that submits a free-text
//! food/restaurant question to the backend, polls until the answer is
//! ready, and displays the markdown result.
//!
//! This crate contains the page, components, query state, network
//! layer, and configuration. The backend query pipeline (retrieval,
//! ranking, answer generation) lives behind the HTTP API it calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
