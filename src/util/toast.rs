//! Transient toast notices.
//!
//! Toasts are fire-and-forget: each one owns its timers and there is no queue,
//! so rapid calls simply stack.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::EnhanceConfig;

pub const SUCCESS_COLOR: &str = "#1A6B6B";
pub const ERROR_COLOR: &str = "#E74C3C";

/// Class carried by every toast element.
pub const TOAST_CLASS: &str = "user-message";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// CSS background color.
    pub background: String,
}

impl Toast {
    /// A toast with an explicit background, or the success color when `None`.
    pub fn new(message: impl Into<String>, background: Option<&str>) -> Self {
        Self { message: message.into(), background: background.unwrap_or(SUCCESS_COLOR).to_owned() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Some(SUCCESS_COLOR))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Some(ERROR_COLOR))
    }
}

/// Anything that can put a toast on screen.
pub trait ToastSink {
    fn show_toast(&mut self, toast: Toast);
}

/// When a toast starts leaving and when it is gone, relative to being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl ToastTimeline {
    #[must_use]
    pub fn from_config(config: &EnhanceConfig) -> Self {
        Self { display_ms: config.toast_display_ms, exit_ms: config.toast_exit_ms }
    }

    #[must_use]
    pub fn removed_after_ms(&self) -> u32 {
        self.display_ms.saturating_add(self.exit_ms)
    }
}
