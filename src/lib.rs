//! # courseport
//!
//! Leptos + WASM browser client for a multi-tenant learning portal:
//! organizations register, portal admins manage employees and course
//! catalogs, employees consume courses, and a system administrator
//! oversees the platform.
//!
//! The core of the crate is the session layer under `auth`: credential
//! storage, payload decoding, and the per-navigation route access
//! decision. The pages and network glue are the application around it;
//! the backend API does all real work.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
