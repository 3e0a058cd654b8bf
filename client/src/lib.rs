//! # client
//!
//! Leptos + WASM frontend for the brandview login page.
//!
//! The interactive behavior (validation groups, busy buttons, the three page
//! flows) is plain Rust state over a headless element model in `dom`, so it
//! runs and tests natively. `pages::login` renders that model and forwards
//! browser events into `page::controller`.

pub mod app;
pub mod config;
pub mod controls;
pub mod dom;
pub mod error;
pub mod namespace;
pub mod net;
pub mod page;
pub mod pages;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
