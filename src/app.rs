//! Page enhancement entry: runs each feature's initializer in order.
//!
//! DESIGN
//! ======
//! Features are independent. A feature whose markup is absent, or whose
//! browser capability is missing, is skipped with a debug log; anything else
//! that fails is logged as a warning. Neither stops the remaining features.
//! Dark mode runs first so the stored theme lands before anything else paints.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::EnhanceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    DarkMode,
    ScrollChrome,
    Search,
    TopicFilter,
    Reveal,
    Shortcuts,
    SmoothScroll,
    LoadMore,
    Newsletter,
}

impl Feature {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DarkMode => "dark-mode",
            Self::ScrollChrome => "scroll-chrome",
            Self::Search => "search",
            Self::TopicFilter => "topic-filter",
            Self::Reveal => "reveal",
            Self::Shortcuts => "shortcuts",
            Self::SmoothScroll => "smooth-scroll",
            Self::LoadMore => "load-more",
            Self::Newsletter => "newsletter",
        }
    }
}

/// Log the outcome of one feature's initializer. Returns whether it is active.
pub fn settle(feature: Feature, result: Result<(), EnhanceError>) -> bool {
    match result {
        Ok(()) => {
            log::debug!("{} enabled", feature.name());
            true
        }
        Err(err) if err.is_expected() => {
            log::debug!("{} skipped: {err}", feature.name());
            false
        }
        Err(err) => {
            log::warn!("{} disabled: {err}", feature.name());
            false
        }
    }
}

/// Label shown on the load-more stub once pressed.
pub const LOAD_MORE_EXHAUSTED_LABEL: &str = "No more posts to load";

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{HtmlButtonElement, Window};

    use super::{Feature, LOAD_MORE_EXHAUSTED_LABEL, settle};
    use crate::config::EnhanceConfig;
    use crate::dom::bindings::PageBindings;
    use crate::dom::location::BrowserLocation;
    use crate::dom::toast::DomToaster;
    use crate::dom::{self, keyboard, listen, newsletter, posts, reveal, scroll, theme};
    use crate::error::EnhanceError;
    use crate::util::toast::ToastTimeline;

    fn install_load_more(button: Option<HtmlButtonElement>) -> Result<(), EnhanceError> {
        let button = button.ok_or(EnhanceError::MissingElement("#loadMorePosts"))?;
        let target = button.clone();
        listen(&button, "click", move |_| {
            target.set_text_content(Some(LOAD_MORE_EXHAUSTED_LABEL));
            target.set_disabled(true);
            let _ = target.style().set_property("opacity", "0.5");
        })
    }

    fn run(window: &Window) -> Result<(), EnhanceError> {
        let document = dom::document(window)?;
        let config = EnhanceConfig::from_document(&document);
        let bindings = PageBindings::lookup(&document);

        settle(Feature::DarkMode, theme::install(window, &bindings, &config));
        settle(Feature::ScrollChrome, scroll::install(window, &bindings, &config).map(|_| ()));

        let filter = posts::controller(&bindings, BrowserLocation::new(window.clone()), &config);
        settle(Feature::Search, posts::install_search(&filter, &bindings, &config));
        settle(Feature::TopicFilter, posts::install_topic_filter(&filter, &bindings));

        settle(Feature::Reveal, reveal::install(window, bindings.reveal_targets(), &config.reveal));
        settle(Feature::Shortcuts, keyboard::install_shortcuts(&document, bindings.search_input.clone()));
        settle(Feature::SmoothScroll, keyboard::install_smooth_scroll(&document));
        settle(Feature::LoadMore, install_load_more(bindings.load_more.clone()));

        let newsletter = match bindings.body.clone() {
            Some(body) => newsletter::install(&bindings, DomToaster::new(body, ToastTimeline::from_config(&config)), &config),
            None => Err(EnhanceError::MissingElement("body")),
        };
        settle(Feature::Newsletter, newsletter);
        Ok(())
    }

    /// Enhance the page now, or once the DOM has finished parsing.
    pub fn enhance() {
        let window = match dom::window() {
            Ok(window) => window,
            Err(err) => {
                log::warn!("page enhancement unavailable: {err}");
                return;
            }
        };

        let loading = window.document().is_some_and(|doc| doc.ready_state() == "loading");
        if !loading {
            if let Err(err) = run(&window) {
                log::warn!("page enhancement failed: {err}");
            }
            return;
        }

        let deferred = window.clone();
        let result = listen(&window, "DOMContentLoaded", move |_| {
            if let Err(err) = run(&deferred) {
                log::warn!("page enhancement failed: {err}");
            }
        });
        if let Err(err) = result {
            log::warn!("could not defer page enhancement: {err}");
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::enhance;
