//! Newsletter subscription mock.
//!
//! State machine for the submit button:
//!
//! ```text
//! Idle --valid submit--> Pending --delay elapsed--> Idle
//! Idle --invalid submit (error toast)--> Idle
//! Pending --any submit--> Pending (ignored; button is disabled)
//! ```
//!
//! There is no backend, so `Pending` always resolves to success.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::util::toast::{Toast, ToastSink};

pub const IDLE_LABEL: &str = "Subscribe →";
pub const PENDING_LABEL: &str = "Subscribing...";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUBSCRIBED_MESSAGE: &str = "🙏 Thank you! You're now subscribed.";

/// Whitespace as ECMAScript's `\s` and `String.prototype.trim` define it. Differs from
/// [`char::is_whitespace`] on U+0085 (not space here) and U+FEFF (space here).
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the
/// domain with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let allowed = |s: &str| !s.is_empty() && !s.chars().any(|c| is_js_space(c) || c == '@');
    if !allowed(local) || !allowed(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Email failed validation; an error toast was shown.
    Rejected,
    /// Button disabled; the caller must call `complete` after the mock delay.
    Started { email: String },
    /// A submission is already pending.
    Ignored,
}

/// The email input and submit button.
pub trait NewsletterView {
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
    fn set_submit(&mut self, enabled: bool, label: &str);
}

pub struct NewsletterController<V, T> {
    state: SubmitState,
    view: V,
    toasts: T,
}

impl<V: NewsletterView, T: ToastSink> NewsletterController<V, T> {
    pub fn new(view: V, toasts: T) -> Self {
        Self { state: SubmitState::Idle, view, toasts }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn toasts(&self) -> &T {
        &self.toasts
    }

    /// Handle a click on the submit button (or Enter in the input).
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmitState::Pending {
            return SubmitOutcome::Ignored;
        }
        let email = self.view.input_value().trim_matches(is_js_space).to_owned();
        if !is_valid_email(&email) {
            self.toasts.show_toast(Toast::error(INVALID_EMAIL_MESSAGE));
            return SubmitOutcome::Rejected;
        }
        self.state = SubmitState::Pending;
        self.view.set_submit(false, PENDING_LABEL);
        log::debug!("newsletter submission started");
        SubmitOutcome::Started { email }
    }

    /// Resolve a pending submission. Does nothing when idle.
    pub fn complete(&mut self) {
        if self.state != SubmitState::Pending {
            return;
        }
        self.toasts.show_toast(Toast::success(SUBSCRIBED_MESSAGE));
        self.view.clear_input();
        self.view.set_submit(true, IDLE_LABEL);
        self.state = SubmitState::Idle;
    }
}
