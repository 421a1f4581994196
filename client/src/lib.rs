//! # storefront-ui
//!
//! Leptos frontend for the Ridgeline apparel storefront.
//!
//! This crate contains pages, layout components, client-side auth gating,
//! the REST client for the storefront backend, and a static seed catalog.
//! The `server` crate renders it with SSR and the browser hydrates it.

#![recursion_limit = "256"]

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating storefront");
    leptos::mount::hydrate_body(app::App);
}
