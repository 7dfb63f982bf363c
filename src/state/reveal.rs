//! One-shot reveal bookkeeping for scroll-triggered fade-ins.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added to an element the first time it scrolls into view.
pub const REVEAL_CLASS: &str = "fade-in";

/// Tracks which observed elements have been revealed. Bits are never cleared.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Record an intersection report for `index`.
    ///
    /// Returns `true` exactly once per element: on its first intersecting
    /// report. The caller reveals and stops observing it.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if *slot || !intersecting {
            return false;
        }
        *slot = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
