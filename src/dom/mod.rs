//! Browser bindings for the page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is compiled only with the `hydrate` feature. Each submodule
//! implements one of the view/store/location traits from `crate::state` or
//! `crate::util` over `web-sys` handles, plus an `install` function that wires
//! its listeners. Listener closures are leaked with `forget()`: they live as
//! long as the page.

pub mod bindings;
pub mod keyboard;
pub mod location;
pub mod newsletter;
pub mod posts;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod toast;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::EnhanceError;

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::Unsupported("window"))
}

pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window.document().ok_or(EnhanceError::Unsupported("document"))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element by id, downcast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// Text of the first descendant of `root` matching `selector`.
pub fn text_of(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .map(|el| el.text_content().unwrap_or_default())
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_displayed(el: &HtmlElement, displayed: bool) {
    let style = el.style();
    let _ = if displayed { style.remove_property("display").map(|_| ()) } else { style.set_property("display", "none") };
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as a passive listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
