use super::*;

#[test]
fn missing_color_defaults_to_success() {
    assert_eq!(Toast::new("hi", None).background, SUCCESS_COLOR);
    assert_eq!(Toast::new("hi", Some("#000")).background, "#000");
}

#[test]
fn error_toast_uses_error_color() {
    assert_eq!(Toast::error("bad").background, ERROR_COLOR);
}

#[test]
fn timeline_removes_after_display_plus_exit() {
    let timeline = ToastTimeline::from_config(&EnhanceConfig::default());
    assert_eq!(timeline.display_ms, 4000);
    assert_eq!(timeline.removed_after_ms(), 4400);
}

#[test]
fn timeline_follows_configured_durations() {
    let config = EnhanceConfig { toast_display_ms: 1000, toast_exit_ms: 250, ..EnhanceConfig::default() };
    let timeline = ToastTimeline::from_config(&config);
    assert_eq!(timeline, ToastTimeline { display_ms: 1000, exit_ms: 250 });
    assert_eq!(timeline.removed_after_ms(), 1250);
}

#[test]
fn removal_time_saturates_instead_of_wrapping() {
    let timeline = ToastTimeline { display_ms: u32::MAX, exit_ms: 400 };
    assert_eq!(timeline.removed_after_ms(), u32::MAX);
}
