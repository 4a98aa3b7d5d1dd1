//! # volunteer-log
//!
//! Leptos + WASM client for logging volunteer hours in the browser.
//!
//! The form, table, and running total are Leptos components driven by a
//! [`controller::LogController`] held in context. Record rules and
//! persistence live in the `records` crate; this crate adds the view state,
//! event wiring, and the browser `localStorage` backend. Browser-only code is
//! compiled under the `csr` feature so the rest runs in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("invalid build configuration, using defaults: {e}");
    }
    log::info!("volunteer log starting: storage_key={}", config.storage_key);

    leptos::mount::mount_to_body(move || view! { <app::App config=config/> });
}
