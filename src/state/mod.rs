//! Page-feature state and controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns its state and talks to the page only through a small
//! view trait. The browser implementations live in `crate::dom`; tests use the
//! recording fakes in `crate::testing`.

pub mod filter;
pub mod newsletter;
pub mod reveal;
pub mod theme;
