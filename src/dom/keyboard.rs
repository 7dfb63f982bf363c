//! Document-level shortcuts and smooth in-page anchor scrolling.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlInputElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::listen;
use crate::error::EnhanceError;
use crate::util::keyboard::{KeyCommand, KeyPress, anchor_target, decode};

/// Escape clears the focused search box; Ctrl/Cmd+K jumps to it.
pub fn install_shortcuts(document: &Document, search_input: Option<HtmlInputElement>) -> Result<(), EnhanceError> {
    let input = search_input.ok_or(EnhanceError::MissingElement("#searchInput"))?;
    let doc = document.clone();
    listen(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let input_el: &Element = &input;
        let key = event.key();
        let press = KeyPress {
            key: &key,
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            search_focused: doc.active_element().as_ref() == Some(input_el),
        };
        match decode(press) {
            Some(KeyCommand::ClearSearch) => {
                input.set_value("");
                if let Ok(input_event) = Event::new("input") {
                    let _ = input.dispatch_event(&input_event);
                }
                let _ = input.blur();
            }
            Some(KeyCommand::FocusSearch) => {
                event.prevent_default();
                let _ = input.focus();
                input.select();
            }
            None => {}
        }
    })
}

/// Smooth-scroll clicks on `a[href^="#"]` to their target, when it exists.
pub fn install_smooth_scroll(document: &Document) -> Result<(), EnhanceError> {
    let doc = document.clone();
    listen(document, "click", move |event: Event| {
        let Some(origin) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = origin.closest("a[href^=\"#\"]") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
            return;
        };
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })
}
