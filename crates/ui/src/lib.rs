//! `estante-ui` — Leptos front end for the library catalog.
//!
//! A thin shell around `estante-client`: each tab is a component that
//! refetches its data when activated and surfaces every failure through a
//! blocking notification. The only client-side state is the current tab,
//! the form fields and the arrays received from the last fetch.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod notify;
#[cfg(target_arch = "wasm32")]
pub mod tabs;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point; mounts the application to the document body.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
