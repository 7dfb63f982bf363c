//! A single toast notice.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::util::toast::TOAST_CLASS;

/// Inline style for a toast; `leaving` starts the fade/slide-out.
fn toast_style(background: &str, leaving: bool) -> String {
    if leaving {
        format!("background: {background}; opacity: 0; transform: translateX(110%); transition: all 0.3s ease;")
    } else {
        format!("background: {background};")
    }
}

#[component]
pub fn ToastNotice(message: String, background: String, leaving: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class=TOAST_CLASS role="status" style=move || toast_style(&background, leaving.get())>
            {message}
        </div>
    }
}
