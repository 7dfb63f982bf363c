//! One-time lookup of every element the page features use.
//!
//! Missing elements are `None` / empty; each feature decides whether it can
//! run with what is present.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::{by_id, query_all};

pub struct PageBindings {
    pub document: Document,
    /// `<html>`, carrier of the dark-mode class.
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,
    pub header: Option<Element>,
    pub search_input: Option<HtmlInputElement>,
    pub post_cards: Vec<HtmlElement>,
    pub posts_section: Option<Element>,
    pub topic_tags: Vec<Element>,
    pub sidebar_widgets: Vec<Element>,
    pub dark_toggle: Option<HtmlElement>,
    pub reading_progress: Option<HtmlElement>,
    pub load_more: Option<HtmlButtonElement>,
    pub subscribe_button: Option<HtmlButtonElement>,
    pub email_input: Option<HtmlInputElement>,
}

impl PageBindings {
    pub fn lookup(document: &Document) -> Self {
        let post_cards = query_all(document, ".post-card")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let posts_section = document.query_selector(".posts-section").ok().flatten();

        Self {
            document: document.clone(),
            root: document.document_element(),
            body: document.body(),
            header: document.get_element_by_id("header"),
            search_input: by_id(document, "searchInput"),
            post_cards,
            posts_section,
            topic_tags: query_all(document, ".topic-tag"),
            sidebar_widgets: query_all(document, ".sidebar-widget"),
            dark_toggle: by_id(document, "darkModeToggle"),
            reading_progress: by_id(document, "reading-progress"),
            load_more: by_id(document, "loadMorePosts"),
            subscribe_button: by_id(document, "subscribeBtn"),
            email_input: by_id(document, "emailInput"),
        }
    }

    /// Elements that fade in on first view: post cards, then sidebar widgets.
    pub fn reveal_targets(&self) -> Vec<Element> {
        self.post_cards
            .iter()
            .map(|card| card.clone().unchecked_into::<Element>())
            .chain(self.sidebar_widgets.iter().cloned())
            .collect()
    }
}
