//! # nestegg-client
//!
//! Leptos + WASM frontend for the Nestegg personal-finance service.
//!
//! The heart of the crate is the session lifecycle: `state::session` holds
//! the (token, profile) pair as the single source of truth, and
//! `state::auth` is the only writer — it logs in, signs up, signs out, and
//! validates persisted tokens against the backend. Pages and the route guard
//! are thin consumers of that state.

pub mod app;
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
