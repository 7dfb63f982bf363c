//! Dark mode flag and its durable preference.
//!
//! The flag is stored as `"1"` / `"0"` under a single key. Storage is
//! best-effort: a failed read means "off", a failed write is logged and the
//! visual change still happens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::EnhanceError;

/// Class toggled on `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark-mode";

const ON: &str = "1";
const OFF: &str = "0";

/// Narrow read/write interface over durable key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, EnhanceError>;
    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError>;
}

/// Session-only store, used when the browser denies `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, EnhanceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, EnhanceError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        (**self).save(key, value)
    }
}

#[must_use]
pub fn encode(enabled: bool) -> &'static str {
    if enabled { ON } else { OFF }
}

/// Only an exact `"1"` means on.
#[must_use]
pub fn decode(raw: Option<&str>) -> bool {
    raw == Some(ON)
}

/// Text shown on the toggle button for a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    pub icon: &'static str,
    pub label: &'static str,
    pub aria_label: &'static str,
}

impl ToggleLabels {
    /// Labels describe the action a click will take, not the current mode.
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self { icon: "☀️", label: "Light Mode", aria_label: "Switch to light mode" }
        } else {
            Self { icon: "🌙", label: "Dark Mode", aria_label: "Switch to dark mode" }
        }
    }
}

/// Document-wide mode class plus the toggle button's text.
pub trait ThemeView {
    fn apply_theme(&mut self, dark: bool, labels: ToggleLabels);
}

/// Owns the in-memory flag; every mutation goes through [`Self::set_dark`].
pub struct DarkModeToggle<S, V> {
    enabled: bool,
    key: String,
    store: S,
    view: V,
}

impl<S: PreferenceStore, V: ThemeView> DarkModeToggle<S, V> {
    pub fn new(store: S, view: V, key: impl Into<String>) -> Self {
        Self { enabled: false, key: key.into(), store, view }
    }

    /// Read the persisted flag (defaulting to off) and apply it.
    pub fn init(&mut self) -> bool {
        let stored = match self.store.load(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!("dark mode preference unreadable: {err}");
                None
            }
        };
        let enabled = decode(stored.as_deref());
        self.set_dark(enabled);
        enabled
    }

    /// Apply `on` to the page, then persist it.
    pub fn set_dark(&mut self, on: bool) {
        self.enabled = on;
        self.view.apply_theme(on, ToggleLabels::for_mode(on));
        if let Err(err) = self.store.save(&self.key, encode(on)) {
            log::debug!("dark mode preference not persisted: {err}");
        }
    }

    pub fn toggle(&mut self) -> bool {
        let next = !self.enabled;
        self.set_dark(next);
        next
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
