//! Keyboard shortcuts and in-page anchor handling.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Escape inside the search box: empty it, re-run search, blur.
    ClearSearch,
    /// Ctrl+K / Cmd+K anywhere: focus and select the search box.
    FocusSearch,
}

/// The parts of a `keydown` event the shortcuts care about.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub search_focused: bool,
}

#[must_use]
pub fn decode(press: KeyPress<'_>) -> Option<KeyCommand> {
    if press.key == "Escape" && press.search_focused {
        return Some(KeyCommand::ClearSearch);
    }
    if (press.ctrl || press.meta) && press.key == "k" {
        return Some(KeyCommand::FocusSearch);
    }
    None
}

/// Element id targeted by an in-page link, e.g. `"#about"` -> `"about"`.
///
/// A bare `#` has no target.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
