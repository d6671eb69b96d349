//! # client
//!
//! Leptos + WASM frontend for the portal: a public landing page and an
//! authenticated dashboard.
//!
//! Route controllers are plain Rust (see `pages`) and talk to the outside
//! world only through the `AuthProvider` and `Navigator` interfaces in
//! `util::auth`, so redirect behavior is testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
