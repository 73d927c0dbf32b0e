//! # quickbite-client
//!
//! Leptos + WASM front-end for the QuickBite food-ordering site: signup,
//! login, logout, email verification, and password reset against the remote
//! authentication API.
//!
//! The `hydrate` feature builds the browser bundle; `ssr` builds the library
//! the axum host renders from.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
