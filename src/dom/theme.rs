//! Dark-mode toggle button and `<html>` class.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement, Window};

use super::bindings::PageBindings;
use super::storage::open_store;
use super::{listen, set_class};
use crate::config::EnhanceConfig;
use crate::error::EnhanceError;
use crate::state::theme::{DARK_CLASS, DarkModeToggle, PreferenceStore, ThemeView, ToggleLabels};

pub struct DomThemeView {
    root: Element,
    button: HtmlElement,
    icon: Option<Element>,
    label: Option<Element>,
}

impl DomThemeView {
    pub fn new(root: Element, button: HtmlElement) -> Self {
        let icon = button.query_selector(".dm-icon").ok().flatten();
        let label = button.query_selector(".dm-label").ok().flatten();
        Self { root, button, icon, label }
    }
}

impl ThemeView for DomThemeView {
    fn apply_theme(&mut self, dark: bool, labels: ToggleLabels) {
        set_class(&self.root, DARK_CLASS, dark);
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(labels.icon));
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(labels.label));
        }
        let _ = self.button.set_attribute("aria-label", labels.aria_label);
    }
}

/// Restore the persisted mode, then toggle on each click.
pub fn install(window: &Window, bindings: &PageBindings, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let button = bindings.dark_toggle.clone().ok_or(EnhanceError::MissingElement("#darkModeToggle"))?;
    let root = bindings.root.clone().ok_or(EnhanceError::MissingElement("html"))?;

    let store: Box<dyn PreferenceStore> = open_store(window);
    let mut toggle = DarkModeToggle::new(store, DomThemeView::new(root, button.clone()), config.storage_key.clone());
    toggle.init();

    let toggle = Rc::new(RefCell::new(toggle));
    listen(&button, "click", move |_| {
        toggle.borrow_mut().toggle();
    })
}
