//! Frame-coalesced scroll notifications.
//!
//! ARCHITECTURE
//! ============
//! One [`ScrollReactor`] per page receives every scroll event. The first event
//! in a frame requests an animation frame and marks the reactor pending; later
//! events in the same frame are dropped. When the frame runs, the reactor reads
//! the scroll position *at that moment* and hands it to each subscriber in
//! registration order.
//!
//! The frame source and the metrics source are traits so the coalescing rule
//! is testable without a browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Class set on the header once the page is scrolled.
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
/// Class set on the back-to-top control while it should show.
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "visible";

/// Elements that can subscribe to the scroll reactor, as reported when none is present.
pub const SCROLL_TARGETS: &str = "#header/#reading-progress/body";

/// Scroll position and extents sampled at frame time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Read fraction in `0.0..=1.0`; `0.0` when the page cannot scroll.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }

    /// Progress as a CSS width, e.g. `"42.5%"`.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress() * 100.0)
    }
}

/// Boolean that flips when the scroll offset crosses a threshold.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdToggle {
    threshold: f64,
    state: Option<bool>,
}

impl ThresholdToggle {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, state: None }
    }

    /// Returns the new state when it differs from the last reported one.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let next = scroll_y > self.threshold;
        if self.state == Some(next) {
            return None;
        }
        self.state = Some(next);
        Some(next)
    }
}

/// Source of "run this before the next repaint" callbacks.
pub trait FrameScheduler {
    /// Returns `false` if the frame could not be requested; the callback is
    /// then dropped unrun and the caller runs the work inline.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool;
}

/// Source of current scroll metrics.
pub trait MetricsSource {
    fn read(&self) -> ScrollMetrics;
}

type Subscriber = Box<dyn FnMut(ScrollMetrics)>;

struct ReactorInner {
    pending: Cell<bool>,
    subscribers: RefCell<Vec<Subscriber>>,
    scheduler: Box<dyn FrameScheduler>,
    metrics: Box<dyn MetricsSource>,
}

/// Shared frame-coalescing scroll notifier. Cloning shares the same reactor.
#[derive(Clone)]
pub struct ScrollReactor {
    inner: Rc<ReactorInner>,
}

impl ScrollReactor {
    pub fn new(scheduler: impl FrameScheduler + 'static, metrics: impl MetricsSource + 'static) -> Self {
        Self {
            inner: Rc::new(ReactorInner {
                pending: Cell::new(false),
                subscribers: RefCell::new(Vec::new()),
                scheduler: Box::new(scheduler),
                metrics: Box::new(metrics),
            }),
        }
    }

    pub fn subscribe(&self, subscriber: impl FnMut(ScrollMetrics) + 'static) {
        self.inner.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Handle one scroll event.
    pub fn on_scroll(&self) {
        if self.inner.pending.replace(true) {
            return;
        }
        let inner = Rc::clone(&self.inner);
        let scheduled = self.inner.scheduler.request_frame(Box::new(move || run_frame(&inner)));
        if !scheduled {
            run_frame(&self.inner);
        }
    }
}

fn run_frame(inner: &ReactorInner) {
    inner.pending.set(false);
    let metrics = inner.metrics.read();
    for subscriber in inner.subscribers.borrow_mut().iter_mut() {
        subscriber(metrics);
    }
}
