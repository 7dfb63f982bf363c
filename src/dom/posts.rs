//! Post card filtering over the rendered list: search box, topic tags, and
//! the "no results" notice.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::bindings::PageBindings;
use super::location::BrowserLocation;
use super::{listen, query_all, set_class, set_displayed, text_of};
use crate::config::EnhanceConfig;
use crate::error::EnhanceError;
use crate::state::filter::{FilterController, FilterView, PostCard, TagFilter};

const NO_RESULTS_CLASS: &str = "no-results-message";
const NO_RESULTS_HTML: &str = "<h3>No posts found</h3><p>Try different keywords.</p>";
const ACTIVE_CLASS: &str = "active";

pub type DomFilter = Rc<RefCell<FilterController<DomFilterView, BrowserLocation>>>;

/// Snapshot title, excerpt, and tag of each card.
pub fn read_cards(cards: &[HtmlElement]) -> Vec<PostCard> {
    cards
        .iter()
        .map(|card| {
            PostCard::new(
                text_of(card, ".post-title a").as_deref(),
                text_of(card, ".post-excerpt").as_deref(),
                text_of(card, ".post-tag").as_deref(),
            )
        })
        .collect()
}

fn button_tag(button: &Element) -> TagFilter {
    TagFilter::parse(&button.get_attribute("data-tag").unwrap_or_default())
}

pub struct DomFilterView {
    document: Document,
    cards: Vec<HtmlElement>,
    tag_buttons: Vec<Element>,
    search_input: Option<HtmlInputElement>,
    posts_section: Option<Element>,
}

impl DomFilterView {
    pub fn new(bindings: &PageBindings) -> Self {
        Self {
            document: bindings.document.clone(),
            cards: bindings.post_cards.clone(),
            tag_buttons: bindings.topic_tags.clone(),
            search_input: bindings.search_input.clone(),
            posts_section: bindings.posts_section.clone(),
        }
    }
}

impl FilterView for DomFilterView {
    fn set_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get(index) {
            set_displayed(card, visible);
        }
    }

    fn mark_active_tag(&mut self, tag: &TagFilter) {
        for button in &self.tag_buttons {
            set_class(button, ACTIVE_CLASS, button_tag(button) == *tag);
        }
    }

    fn clear_search_input(&mut self) {
        if let Some(input) = &self.search_input {
            input.set_value("");
        }
    }

    fn remove_no_results(&mut self) {
        for notice in query_all(&self.document, &format!(".{NO_RESULTS_CLASS}")) {
            notice.remove();
        }
    }

    fn insert_no_results(&mut self) {
        let Some(section) = &self.posts_section else {
            return;
        };
        let Ok(notice) = self.document.create_element("div") else {
            return;
        };
        notice.set_class_name(NO_RESULTS_CLASS);
        notice.set_inner_html(NO_RESULTS_HTML);
        let _ = section.append_child(&notice);
    }
}

/// Build the filter controller over the page's cards.
pub fn controller(bindings: &PageBindings, location: BrowserLocation, config: &EnhanceConfig) -> DomFilter {
    let cards = read_cards(&bindings.post_cards);
    let view = DomFilterView::new(bindings);
    Rc::new(RefCell::new(FilterController::new(cards, view, location, config.category_param.clone())))
}

/// Debounced search-as-you-type. Each keystroke replaces (and so cancels)
/// the pending timer; a tag click in between makes its ticket stale.
pub fn install_search(filter: &DomFilter, bindings: &PageBindings, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let input = bindings.search_input.clone().ok_or(EnhanceError::MissingElement("#searchInput"))?;
    if bindings.post_cards.is_empty() {
        return Err(EnhanceError::MissingElement(".post-card"));
    }

    let delay_ms = config.search_debounce_ms;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let filter = Rc::clone(filter);
    let source = input.clone();
    listen(&input, "input", move |_| {
        let query = source.value();
        let ticket = filter.borrow_mut().schedule_search();
        let filter = Rc::clone(&filter);
        let timeout = Timeout::new(delay_ms, move || {
            filter.borrow_mut().run_scheduled_search(ticket, &query);
        });
        *pending.borrow_mut() = Some(timeout);
    })
}

/// Topic-tag buttons plus the initial `category` from the URL.
pub fn install_topic_filter(filter: &DomFilter, bindings: &PageBindings) -> Result<(), EnhanceError> {
    if bindings.topic_tags.is_empty() {
        return Err(EnhanceError::MissingElement(".topic-tag"));
    }

    for button in &bindings.topic_tags {
        let filter = Rc::clone(filter);
        let source = button.clone();
        listen(button, "click", move |_| {
            filter.borrow_mut().select_tag(button_tag(&source));
        })?;
    }

    if let Some(tag) = filter.borrow_mut().init_from_url() {
        log::debug!("initial tag filter from url: {}", tag.as_str());
    }
    Ok(())
}
