//! # client
//!
//! Leptos + WASM front end for the InfraCost cost-estimation app.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers for the AI endpoints. State containers are plain structs with
//! the reconciliation logic as methods; components hold them in `RwSignal`
//! contexts and mutate exclusively through those methods.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app client-side.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
