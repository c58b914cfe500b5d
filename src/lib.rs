//! # image-studio
//!
//! Leptos + WASM front-end for a remote text-to-image API.
//!
//! Users write a prompt, tune generation options, and submit it to the image
//! backend; results land in a bounded recent list. Against the authenticated
//! backend the signed-in user also gets a persisted gallery with detail,
//! download, and delete actions.
//!
//! Browser I/O is behind the `csr` feature. State models, wire codecs, and
//! formatting helpers build natively and are unit-tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
