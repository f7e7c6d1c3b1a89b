//! # portal-web
//!
//! Leptos + WASM frontend for the shipment tracking portal.
//!
//! This crate contains the session store (token + profile mirrored to
//! `localStorage`), the auth API client, the route table with its navigation
//! guard, and the thin pages mounted behind it. Everything outside `pages`
//! and `app` runs on the host as well, so the store and guard are unit-tested
//! without a browser.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// WASM entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
