use super::*;
use crate::testing::MemoryLocation;

#[test]
fn write_then_read_round_trips_tag() {
    let mut location = MemoryLocation::default();
    write_filter(&mut location, "category", &TagFilter::parse("Faith")).unwrap();
    assert_eq!(read_filter(&location, "category"), Some(TagFilter::parse("Faith")));
}

#[test]
fn writing_all_removes_the_parameter() {
    let mut location = MemoryLocation::with_query(&[("category", "Tech"), ("ref", "home")]);
    write_filter(&mut location, "category", &TagFilter::All).unwrap();
    assert_eq!(location.query_param("category"), None);
    assert_eq!(location.query_param("ref").as_deref(), Some("home"));
}

#[test]
fn empty_parameter_reads_as_absent() {
    let location = MemoryLocation::with_query(&[("category", "")]);
    assert_eq!(read_filter(&location, "category"), None);
}

#[test]
fn explicit_all_reads_as_all() {
    let location = MemoryLocation::with_query(&[("category", "all")]);
    assert_eq!(read_filter(&location, "category"), Some(TagFilter::All));
}

#[test]
fn unavailable_history_surfaces_error() {
    let mut location = MemoryLocation { history_unavailable: true, ..MemoryLocation::default() };
    let err = write_filter(&mut location, "category", &TagFilter::All).unwrap_err();
    assert!(err.is_expected());
}
