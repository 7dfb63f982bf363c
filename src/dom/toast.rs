//! [`ToastSink`] that mounts a `ToastNotice` into `<body>`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::components::toast::ToastNotice;
use crate::util::toast::{Toast, ToastSink, ToastTimeline};

#[derive(Clone)]
pub struct DomToaster {
    body: HtmlElement,
    timeline: ToastTimeline,
}

impl DomToaster {
    pub fn new(body: HtmlElement, timeline: ToastTimeline) -> Self {
        Self { body, timeline }
    }
}

impl ToastSink for DomToaster {
    fn show_toast(&mut self, toast: Toast) {
        let Toast { message, background } = toast;
        let leaving = RwSignal::new(false);
        let handle = leptos::mount::mount_to(self.body.clone(), move || {
            view! { <ToastNotice message background leaving/> }
        });

        let exit_ms = self.timeline.exit_ms;
        Timeout::new(self.timeline.display_ms, move || {
            leaving.set(true);
            // Dropping the mount handle removes the element.
            Timeout::new(exit_ms, move || {
                drop(handle);
                leaving.dispose();
            })
            .forget();
        })
        .forget();
    }
}
