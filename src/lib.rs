//! # vestibule
//!
//! Leptos + WASM account-authentication front end: sign-in and sign-up
//! forms with client-side validation, a thin REST client, encrypted cookie
//! session persistence, and public/gated route gating.
//!
//! The crate compiles natively for unit tests; everything that touches the
//! browser (cookie jar, HTTP, timers) is behind the `hydrate` feature with
//! inert fallbacks.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
