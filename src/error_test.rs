use super::*;

#[test]
fn missing_element_and_unsupported_are_expected() {
    assert!(EnhanceError::MissingElement("#header").is_expected());
    assert!(EnhanceError::Unsupported("IntersectionObserver").is_expected());
}

#[test]
fn storage_and_dom_failures_are_not_expected() {
    assert!(!EnhanceError::Storage("quota".into()).is_expected());
    assert!(!EnhanceError::Dom("boom".into()).is_expected());
    assert!(!EnhanceError::Config("bad".into()).is_expected());
}

#[test]
fn display_names_the_missing_selector() {
    let err = EnhanceError::MissingElement("#searchInput");
    assert_eq!(err.to_string(), "missing element: #searchInput");
}
