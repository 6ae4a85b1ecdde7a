//! # wishlist-admin
//!
//! Leptos + WASM front end for the wishlist REST service.
//!
//! Two panels manage wishlists and their items through one request
//! dispatcher. Each panel keeps its own transaction result; the app root
//! keeps the shared wishlist registry.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod task;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::detect();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("wishlist admin starting against {:?}", config.api.root());
    leptos::mount::mount_to_body(app::App);
}
