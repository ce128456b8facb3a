//! # transcript-client
//!
//! Leptos + WASM browser client for a live speech-transcript and assistant
//! chat service.
//!
//! The server owns the conversation. This crate polls its snapshot, listens
//! for streamed assistant replies, merges both into one time-ordered
//! transcript, and keeps the viewport pinned to the newest message unless
//! the user has scrolled away. Buttons and the composer POST actions back.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
