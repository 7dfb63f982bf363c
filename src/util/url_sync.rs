//! Query-string mirror of the tag filter.
//!
//! The browser implementation lives in `dom::location`; the controller only
//! sees the [`Location`] trait so URL behavior can be exercised natively.

#[cfg(test)]
#[path = "url_sync_test.rs"]
mod url_sync_test;

use crate::error::EnhanceError;
use crate::state::filter::TagFilter;

/// Read and replace single query parameters of the current page URL.
pub trait Location {
    fn query_param(&self, name: &str) -> Option<String>;

    /// Set (`Some`) or delete (`None`) `name`, replacing the current history
    /// entry. Must not navigate or push a new entry.
    fn replace_query_param(&mut self, name: &str, value: Option<&str>) -> Result<(), EnhanceError>;
}

/// Tag named by `param`, or `None` when the parameter is absent or empty.
pub fn read_filter<L: Location + ?Sized>(location: &L, param: &str) -> Option<TagFilter> {
    location
        .query_param(param)
        .filter(|raw| !raw.is_empty())
        .map(|raw| TagFilter::parse(&raw))
}

/// Write `tag` under `param`; [`TagFilter::All`] removes the parameter.
pub fn write_filter<L: Location + ?Sized>(location: &mut L, param: &str, tag: &TagFilter) -> Result<(), EnhanceError> {
    location.replace_query_param(param, tag.as_param())
}
