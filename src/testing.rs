//! Recording fakes for the view, location, storage, toast, and frame traits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::EnhanceError;
use crate::state::filter::{FilterView, TagFilter};
use crate::state::newsletter::{IDLE_LABEL, NewsletterView};
use crate::state::theme::{PreferenceStore, ThemeView, ToggleLabels};
use crate::util::scroll::{FrameScheduler, MetricsSource, ScrollMetrics};
use crate::util::toast::{Toast, ToastSink};
use crate::util::url_sync::Location;

// =============================================================
// Filter view
// =============================================================

#[derive(Debug, Default)]
pub struct RecordingFilterView {
    pub visible: Vec<bool>,
    pub active_tag: Option<TagFilter>,
    pub search_value: String,
    pub notices: usize,
    pub notice_inserts: usize,
}

impl RecordingFilterView {
    pub fn with_cards(count: usize) -> Self {
        Self { visible: vec![true; count], ..Self::default() }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }
}

impl FilterView for RecordingFilterView {
    fn set_card_visible(&mut self, index: usize, visible: bool) {
        self.visible[index] = visible;
    }

    fn mark_active_tag(&mut self, tag: &TagFilter) {
        self.active_tag = Some(tag.clone());
    }

    fn clear_search_input(&mut self) {
        self.search_value.clear();
    }

    fn remove_no_results(&mut self) {
        self.notices = 0;
    }

    fn insert_no_results(&mut self) {
        self.notices += 1;
        self.notice_inserts += 1;
    }
}

// =============================================================
// Location
// =============================================================

#[derive(Debug, Default)]
pub struct MemoryLocation {
    pub params: Vec<(String, String)>,
    pub replacements: usize,
    pub history_unavailable: bool,
}

impl MemoryLocation {
    pub fn with_query(pairs: &[(&str, &str)]) -> Self {
        Self {
            params: pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            ..Self::default()
        }
    }
}

impl Location for MemoryLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        self.params.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    fn replace_query_param(&mut self, name: &str, value: Option<&str>) -> Result<(), EnhanceError> {
        if self.history_unavailable {
            return Err(EnhanceError::Unsupported("history.replaceState"));
        }
        self.replacements += 1;
        match value {
            Some(value) => {
                if let Some(slot) = self.params.iter_mut().find(|(k, _)| k == name) {
                    slot.1 = value.to_owned();
                } else {
                    self.params.push((name.to_owned(), value.to_owned()));
                }
            }
            None => self.params.retain(|(k, _)| k != name),
        }
        Ok(())
    }
}

// =============================================================
// Storage
// =============================================================

/// Store whose every call fails, like a browser with storage disabled.
#[derive(Debug, Default)]
pub struct DeniedStore;

impl PreferenceStore for DeniedStore {
    fn load(&self, _key: &str) -> Result<Option<String>, EnhanceError> {
        Err(EnhanceError::Storage("SecurityError".into()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), EnhanceError> {
        Err(EnhanceError::Storage("QuotaExceededError".into()))
    }
}

// =============================================================
// Theme view
// =============================================================

#[derive(Debug, Default)]
pub struct RecordingThemeView {
    pub dark: Option<bool>,
    pub labels: Option<ToggleLabels>,
    pub applies: usize,
}

impl ThemeView for RecordingThemeView {
    fn apply_theme(&mut self, dark: bool, labels: ToggleLabels) {
        self.dark = Some(dark);
        self.labels = Some(labels);
        self.applies += 1;
    }
}

// =============================================================
// Newsletter view and toasts
// =============================================================

#[derive(Debug)]
pub struct RecordingNewsletterView {
    pub input: String,
    pub enabled: bool,
    pub label: String,
}

impl RecordingNewsletterView {
    pub fn with_input(input: &str) -> Self {
        Self { input: input.to_owned(), enabled: true, label: IDLE_LABEL.to_owned() }
    }
}

impl NewsletterView for RecordingNewsletterView {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.enabled = enabled;
        label.clone_into(&mut self.label);
    }
}

#[derive(Debug, Default)]
pub struct RecordingToasts {
    pub shown: Vec<Toast>,
}

impl ToastSink for RecordingToasts {
    fn show_toast(&mut self, toast: Toast) {
        self.shown.push(toast);
    }
}

// =============================================================
// Frames and metrics
// =============================================================

/// Frame source that queues callbacks until the test runs them.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queued: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    refuse: Rc<Cell<bool>>,
}

impl ManualFrames {
    pub fn refusing() -> Self {
        let frames = Self::default();
        frames.refuse.set(true);
        frames
    }

    pub fn queued(&self) -> usize {
        self.queued.borrow().len()
    }

    /// Run every callback queued so far, as one rendered frame.
    pub fn run_frame(&self) {
        let callbacks = std::mem::take(&mut *self.queued.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        if self.refuse.get() {
            return false;
        }
        self.queued.borrow_mut().push(callback);
        true
    }
}

/// Metrics the test can move between frames.
#[derive(Clone, Default)]
pub struct SharedMetrics {
    pub current: Rc<Cell<ScrollMetrics>>,
}

impl SharedMetrics {
    pub fn set_scroll_y(&self, scroll_y: f64) {
        let mut metrics = self.current.get();
        metrics.scroll_y = scroll_y;
        self.current.set(metrics);
    }
}

impl MetricsSource for SharedMetrics {
    fn read(&self) -> ScrollMetrics {
        self.current.get()
    }
}
