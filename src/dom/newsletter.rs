//! Newsletter form: email input plus subscribe button.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

use super::bindings::PageBindings;
use super::listen;
use super::toast::DomToaster;
use crate::config::EnhanceConfig;
use crate::error::EnhanceError;
use crate::state::newsletter::{NewsletterController, NewsletterView, SubmitOutcome};

pub struct DomNewsletterView {
    input: HtmlInputElement,
    button: HtmlButtonElement,
}

impl NewsletterView for DomNewsletterView {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.button.set_disabled(!enabled);
        self.button.set_text_content(Some(label));
    }
}

pub fn install(bindings: &PageBindings, toaster: DomToaster, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let button = bindings.subscribe_button.clone().ok_or(EnhanceError::MissingElement("#subscribeBtn"))?;
    let input = bindings.email_input.clone().ok_or(EnhanceError::MissingElement("#emailInput"))?;

    let view = DomNewsletterView { input: input.clone(), button: button.clone() };
    let controller = Rc::new(RefCell::new(NewsletterController::new(view, toaster)));
    let delay_ms = config.subscribe_delay_ms;

    listen(&button, "click", move |_| {
        let outcome = controller.borrow_mut().submit();
        if let SubmitOutcome::Started { .. } = outcome {
            let controller = Rc::clone(&controller);
            Timeout::new(delay_ms, move || controller.borrow_mut().complete()).forget();
        }
    })?;

    // Enter goes through the button so a disabled button swallows it.
    listen(&input, "keydown", move |event: Event| {
        if event.dyn_ref::<KeyboardEvent>().is_some_and(|e| e.key() == "Enter") {
            button.click();
        }
    })
}
