//! # client
//!
//! Leptos frontend for Vista: the marketing landing page, the seller
//! dashboard, the staging studio, and the before/after compare view.
//!
//! The crate builds twice. With `ssr` the server renders [`app::App`] into
//! HTML; with `hydrate` the same components attach to that markup in the
//! browser and the staging client, timers, and storage become live. Drag
//! tracking for the comparison slider lives in the `slider` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
