use super::*;

#[test]
fn first_intersection_reveals_once() {
    let mut tracker = RevealTracker::new(2);
    assert!(tracker.observe(0, true));
    assert!(!tracker.observe(0, true));
    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.remaining(), 1);
}

#[test]
fn non_intersecting_reports_do_not_reveal() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(0, false));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn revealed_never_reverts() {
    let mut tracker = RevealTracker::new(1);
    tracker.observe(0, true);
    tracker.observe(0, false);
    assert!(tracker.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(5, true));
    assert!(!tracker.is_revealed(5));
}
