//! Elements the enhancer adds to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog markup is rendered ahead of time; only the back-to-top control and
//! toast notices are created client-side. Both are Leptos components mounted
//! directly into `<body>`.

pub mod back_to_top;
pub mod toast;
