//! # projectx-client
//!
//! Leptos + WASM single-page client for the Project X account area: login,
//! registration, activation, password reset and change, and a small
//! authenticated dashboard/settings area.
//!
//! The crate is organized around one session store (`state::session`) that
//! every page reads through typed projections. Remote calls go through the
//! auth gateway (`net::api`), which is the only code that issues session
//! mutations after talking to the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
