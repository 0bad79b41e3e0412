//! # authgate-client
//!
//! Leptos + WASM authentication client: sign up, sign in and logout against
//! a cookie-session `/auth` endpoint, with a Russian/English UI.
//!
//! `net` holds the HTTP contract and is usable on its own (the CLI and the
//! contract tests drive it natively); `app`, `pages`, `state`, `util` and
//! `i18n` make up the browser UI.

pub mod app;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
