//! # lostfound-client
//!
//! Leptos + WASM frontend for the campus lost-and-found service.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session/authorization layer that gates protected
//! routes. Every screen is a thin view over the remote HTTP API; shared
//! session state is provided as context by [`app::App`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
