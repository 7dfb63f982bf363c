//! Utility helpers shared across page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from feature logic to
//! improve reuse and testability.

pub mod keyboard;
pub mod scroll;
pub mod toast;
pub mod url_sync;
