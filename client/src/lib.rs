//! # client
//!
//! Leptos + WASM frontend for the back-office dashboard (employees, purchase
//! approval, vendors).
//!
//! Authentication and data live in a hosted backend. This crate owns the
//! routing, the session provider wiring, the route guard, the page shells and
//! the thin feature components mounted inside them.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
