//! Scroll-driven chrome: sticky header, back-to-top control, reading progress.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::bindings::PageBindings;
use super::{listen_passive, set_class};
use crate::components::back_to_top::BackToTop;
use crate::config::EnhanceConfig;
use crate::error::EnhanceError;
use crate::util::scroll::{
    FrameScheduler, HEADER_SCROLLED_CLASS, MetricsSource, SCROLL_TARGETS, ScrollMetrics, ScrollReactor,
    ThresholdToggle,
};

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct AnimationFrames {
    window: Window,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        let closure = Closure::once_into_js(move |_ts: f64| callback());
        self.window.request_animation_frame(closure.unchecked_ref()).is_ok()
    }
}

/// Live window/document scroll extents.
pub struct WindowMetrics {
    window: Window,
}

impl MetricsSource for WindowMetrics {
    fn read(&self) -> ScrollMetrics {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let scroll_height = self
            .window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        ScrollMetrics { scroll_y, scroll_height, viewport_height }
    }
}

/// Subscribe every scroll feature whose element exists, then attach the
/// single scroll listener.
pub fn install(window: &Window, bindings: &PageBindings, config: &EnhanceConfig) -> Result<ScrollReactor, EnhanceError> {
    let reactor = ScrollReactor::new(
        AnimationFrames { window: window.clone() },
        WindowMetrics { window: window.clone() },
    );

    if let Some(header) = bindings.header.clone() {
        let mut scrolled = ThresholdToggle::new(config.header_scroll_threshold);
        reactor.subscribe(move |metrics| {
            if let Some(on) = scrolled.update(metrics.scroll_y) {
                set_class(&header, HEADER_SCROLLED_CLASS, on);
            }
        });
    }

    if bindings.body.is_some() {
        let visible = RwSignal::new(false);
        leptos::mount::mount_to_body(move || view! { <BackToTop visible/> });
        let mut shown = ThresholdToggle::new(config.back_to_top_threshold);
        reactor.subscribe(move |metrics| {
            if let Some(on) = shown.update(metrics.scroll_y) {
                visible.set(on);
            }
        });
    }

    if let Some(bar) = bindings.reading_progress.clone() {
        reactor.subscribe(move |metrics| {
            let _ = bar.style().set_property("width", &metrics.progress_width());
        });
    }

    if reactor.subscriber_count() == 0 {
        return Err(EnhanceError::MissingElement(SCROLL_TARGETS));
    }

    let on_scroll = reactor.clone();
    listen_passive(window, "scroll", move |_| on_scroll.on_scroll())?;
    Ok(reactor)
}
