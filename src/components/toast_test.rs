use super::*;

#[test]
fn shown_toast_only_sets_background() {
    assert_eq!(toast_style("#1A6B6B", false), "background: #1A6B6B;");
}

#[test]
fn leaving_toast_fades_and_slides_out() {
    let style = toast_style("#E74C3C", true);
    assert!(style.starts_with("background: #E74C3C;"));
    assert!(style.contains("opacity: 0"));
    assert!(style.contains("translateX(110%)"));
}
