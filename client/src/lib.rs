//! # client
//!
//! Leptos + WASM operator UI for inbox triage.
//!
//! This crate contains pages, components, the browser API client, and
//! `localStorage` session glue. Domain rules (viewer dispatch, selection,
//! stale-response handling) live in the shared `triage` crate; this crate
//! only wires them to signals and DOM events.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
