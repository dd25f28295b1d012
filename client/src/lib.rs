//! # projectpulse-client
//!
//! Leptos + WASM frontend for ProjectPulse, a project and task tracker backed
//! by a REST API.
//!
//! This crate contains the root app and routes, pages, components, the
//! session store, and the typed REST client. The `ssr` feature builds it for
//! server rendering inside the host binary; `hydrate` builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
