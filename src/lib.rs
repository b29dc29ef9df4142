//! # gitfolio
//!
//! Leptos + WASM client shell for Gitfolio, a web application that turns a
//! developer's GitHub history into a visual portfolio.
//!
//! This crate contains the public-facing pages (marketing home page and the
//! GitHub OAuth handoff screen), shared session state, site configuration,
//! and the thin REST layer that talks to the auth backend. The analysis
//! pipeline and the dashboard live in separate services reached by
//! navigation and the OAuth callback.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
