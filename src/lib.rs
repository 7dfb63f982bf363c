//! # insight-client
//!
//! Leptos + WASM enhancements for the statically rendered Insight blog:
//! debounced post search, topic-tag filtering mirrored into `?category=`,
//! sticky header, back-to-top control, reading progress, one-shot fade-ins,
//! a persisted dark-mode toggle, toast notices, the newsletter mock, and the
//! load-more stub.
//!
//! Feature logic lives in `state` and `util` and compiles natively; the
//! `hydrate` feature adds the `dom` bindings and the `hydrate()` wasm entry.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod testing;

/// Wasm entry point, called by the page's loader script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::enhance();
}
