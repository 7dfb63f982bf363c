//! One-shot fade-in via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::RevealConfig;
use crate::error::EnhanceError;
use crate::state::reveal::{REVEAL_CLASS, RevealTracker};

fn observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe `targets`; each gets the reveal class once and is then unobserved.
/// Skipped entirely when the runtime has no `IntersectionObserver`.
pub fn install(window: &Window, targets: Vec<Element>, config: &RevealConfig) -> Result<(), EnhanceError> {
    if !observer_supported(window) {
        return Err(EnhanceError::Unsupported("IntersectionObserver"));
    }
    if targets.is_empty() {
        return Err(EnhanceError::MissingElement(".post-card"));
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let targets = Rc::new(targets);
    let observed = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    Ok(())
}
