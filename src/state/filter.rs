//! Post filtering: free-text search and tag selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are rendered by the static site generator; this module only decides
//! which of them are displayed. Filtering never removes a card from the page,
//! so any filter can be undone by applying another.
//!
//! Tag selection and search are mutually exclusive on screen: selecting a tag
//! clears the search box, while searching leaves the selected tag recorded so
//! the URL keeps pointing at the reader's category.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::util::url_sync::{Location, read_filter, write_filter};

/// Sentinel tag meaning "no tag filter".
pub const ALL_TAG: &str = "all";

/// The active tag filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Interpret a `data-tag` value or query-string value.
    ///
    /// The empty string and the literal `all` both mean [`TagFilter::All`];
    /// anything else is kept verbatim because matching is case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_TAG { Self::All } else { Self::Tag(raw.to_owned()) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    /// Value written to the query string; `None` removes the parameter.
    #[must_use]
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Tag(tag) => Some(tag),
        }
    }

    /// Whether a card carrying `card_tag` is shown under this filter.
    #[must_use]
    pub fn admits(&self, card_tag: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => card_tag == Some(tag.as_str()),
        }
    }
}

/// Read-only snapshot of one rendered post card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostCard {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    /// Tag label, trimmed as rendered.
    pub tag: Option<String>,
}

impl PostCard {
    pub fn new(title: Option<&str>, excerpt: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_owned),
            excerpt: excerpt.map(str::to_owned),
            tag: tag.map(|t| t.trim().to_owned()),
        }
    }

    /// Search decision for an already-normalized term.
    ///
    /// Returns `None` for cards without a title link; those are left as-is.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> Option<bool> {
        let title = self.title.as_deref()?;
        if term.is_empty() {
            return Some(true);
        }
        let in_title = title.to_lowercase().contains(term);
        let in_excerpt = self
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| excerpt.to_lowercase().contains(term));
        Some(in_title || in_excerpt)
    }
}

/// Trim and lower-case a raw search query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filter state owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub current: TagFilter,
}

/// Surface the controller drives: card visibility, tag buttons, search box,
/// and the "no results" notice.
pub trait FilterView {
    fn set_card_visible(&mut self, index: usize, visible: bool);
    /// Mark every tag button whose tag equals `tag` active, all others inactive.
    fn mark_active_tag(&mut self, tag: &TagFilter);
    fn clear_search_input(&mut self);
    fn remove_no_results(&mut self);
    /// Append one notice. Callers remove any previous notice first.
    fn insert_no_results(&mut self);
}

/// Owns the card snapshot and filter state and keeps view and URL in step.
pub struct FilterController<V, L> {
    cards: Vec<PostCard>,
    state: FilterState,
    view: V,
    location: L,
    param: String,
    /// Bumped whenever a search is scheduled or the search box is cleared.
    search_generation: u64,
}

/// Handle for a deferred search; stale once a newer search or a tag
/// activation has happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl<V: FilterView, L: Location> FilterController<V, L> {
    pub fn new(cards: Vec<PostCard>, view: V, location: L, param: impl Into<String>) -> Self {
        Self { cards, state: FilterState::default(), view, location, param: param.into(), search_generation: 0 }
    }

    #[must_use]
    pub fn current(&self) -> &TagFilter {
        &self.state.current
    }

    #[must_use]
    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Show cards admitted by `tag`, hide the rest, clear search and notice.
    ///
    /// Returns the number of visible cards.
    pub fn apply_filter(&mut self, tag: &TagFilter) -> usize {
        let mut visible = 0;
        for (index, card) in self.cards.iter().enumerate() {
            let show = tag.admits(card.tag.as_deref());
            self.view.set_card_visible(index, show);
            if show {
                visible += 1;
            }
        }
        self.view.clear_search_input();
        self.search_generation += 1;
        self.view.remove_no_results();
        visible
    }

    /// Activate a tag exactly as a click on its button does.
    pub fn select_tag(&mut self, tag: TagFilter) -> usize {
        self.state.current = tag;
        self.view.mark_active_tag(&self.state.current);
        let current = self.state.current.clone();
        let visible = self.apply_filter(&current);
        self.update_url_from_filter();
        log::debug!("tag filter set to {:?}, {visible} cards visible", current.as_str());
        visible
    }

    /// Filter by free text against titles and excerpts.
    ///
    /// Returns the number of matching cards. The tag filter is left recorded.
    pub fn perform_search(&mut self, query: &str) -> usize {
        let term = normalize_query(query);
        let mut visible = 0;
        for (index, card) in self.cards.iter().enumerate() {
            let Some(matched) = card.matches_term(&term) else {
                continue;
            };
            self.view.set_card_visible(index, matched);
            if matched {
                visible += 1;
            }
        }

        self.view.remove_no_results();
        if visible == 0 && !term.is_empty() {
            self.view.insert_no_results();
        }
        visible
    }

    /// Reserve a deferred search, invalidating any earlier one.
    pub fn schedule_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        SearchTicket(self.search_generation)
    }

    /// Run a deferred search unless it was superseded.
    ///
    /// Returns `None` when the ticket is stale.
    pub fn run_scheduled_search(&mut self, ticket: SearchTicket, query: &str) -> Option<usize> {
        if ticket.0 != self.search_generation {
            log::debug!("dropping superseded search for {query:?}");
            return None;
        }
        Some(self.perform_search(query))
    }

    /// Mirror the current tag into the query string without navigating.
    pub fn update_url_from_filter(&mut self) {
        if let Err(err) = write_filter(&mut self.location, &self.param, &self.state.current) {
            log::debug!("url sync skipped: {err}");
        }
    }

    /// Apply the tag named in the URL, if any, then normalize the URL.
    ///
    /// Returns the tag taken from the URL.
    pub fn init_from_url(&mut self) -> Option<TagFilter> {
        let initial = read_filter(&self.location, &self.param);
        if let Some(tag) = initial.clone() {
            self.select_tag(tag);
        } else {
            self.update_url_from_filter();
        }
        initial
    }
}
