//! # namelog
//!
//! Leptos + WASM single-page client for a name log backend: type a name,
//! submit it, and see the stored list with creation timestamps.
//!
//! This crate contains the page, components, client state and its reducer,
//! the REST transport, and the error-message derivation for the backend's
//! failure payloads. Browser-only code sits behind the `csr` feature; without
//! it the crate builds natively so state and error logic can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, route `log` to the console,
/// and mount the root component onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
