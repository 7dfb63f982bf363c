use super::*;
use crate::testing::{DeniedStore, RecordingThemeView};

const KEY: &str = "yhz-dark";

#[test]
fn decode_only_accepts_exact_one() {
    assert!(decode(Some("1")));
    assert!(!decode(Some("0")));
    assert!(!decode(Some("true")));
    assert!(!decode(None));
}

#[test]
fn encode_round_trips_through_decode() {
    assert!(decode(Some(encode(true))));
    assert!(!decode(Some(encode(false))));
}

#[test]
fn labels_describe_the_next_action() {
    let dark = ToggleLabels::for_mode(true);
    assert_eq!(dark.label, "Light Mode");
    assert_eq!(dark.aria_label, "Switch to light mode");
    let light = ToggleLabels::for_mode(false);
    assert_eq!(light.label, "Dark Mode");
    assert_eq!(light.icon, "🌙");
}

#[test]
fn init_defaults_to_off_when_nothing_stored() {
    let mut toggle = DarkModeToggle::new(MemoryStore::default(), RecordingThemeView::default(), KEY);
    assert!(!toggle.init());
    assert_eq!(toggle.view().dark, Some(false));
    assert_eq!(toggle.store().load(KEY).unwrap().as_deref(), Some("0"));
}

#[test]
fn set_dark_persists_on_representation() {
    let mut toggle = DarkModeToggle::new(MemoryStore::default(), RecordingThemeView::default(), KEY);
    toggle.set_dark(true);
    assert_eq!(toggle.store().load(KEY).unwrap().as_deref(), Some("1"));
    assert_eq!(toggle.view().labels, Some(ToggleLabels::for_mode(true)));
}

#[test]
fn fresh_init_restores_persisted_dark_mode() {
    let store = MemoryStore::default();
    store.save(KEY, "1").unwrap();
    let mut toggle = DarkModeToggle::new(store, RecordingThemeView::default(), KEY);
    assert!(toggle.init());
    assert!(toggle.is_enabled());
    assert_eq!(toggle.view().dark, Some(true));
}

#[test]
fn toggle_flips_and_keeps_view_and_store_consistent() {
    let mut toggle = DarkModeToggle::new(MemoryStore::default(), RecordingThemeView::default(), KEY);
    toggle.init();
    assert!(toggle.toggle());
    assert_eq!(toggle.view().dark, Some(true));
    assert_eq!(toggle.store().load(KEY).unwrap().as_deref(), Some("1"));
    assert!(!toggle.toggle());
    assert_eq!(toggle.view().dark, Some(false));
    assert_eq!(toggle.store().load(KEY).unwrap().as_deref(), Some("0"));
}

#[test]
fn denied_storage_still_changes_the_page() {
    let mut toggle = DarkModeToggle::new(DeniedStore, RecordingThemeView::default(), KEY);
    assert!(!toggle.init());
    assert!(toggle.toggle());
    assert_eq!(toggle.view().dark, Some(true));
    assert_eq!(toggle.view().applies, 2);
}

#[test]
fn boxed_store_delegates() {
    let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
    store.save(KEY, "1").unwrap();
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some("1"));
}
