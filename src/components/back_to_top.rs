//! Floating "back to top" button, shown once the page is scrolled far enough.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use leptos::prelude::*;

use crate::util::scroll::BACK_TO_TOP_VISIBLE_CLASS;

const BASE_CLASS: &str = "back-to-top";

fn button_class(visible: bool) -> String {
    if visible { format!("{BASE_CLASS} {BACK_TO_TOP_VISIBLE_CLASS}") } else { BASE_CLASS.to_owned() }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Back-to-top control; `visible` is driven by the scroll reactor.
#[component]
pub fn BackToTop(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class=move || button_class(visible.get())
            aria-label="Back to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
