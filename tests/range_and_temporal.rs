//! Integration tests for range set and temporal assertions.

mod common;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta};
use common::init_tracing;
use testkit_assert::checks::{range_sets, temporals};
use testkit_assert::config::AssertionInfo;
use testkit_assert::prelude::*;

fn opening_hours() -> RangeSet<u32> {
    [
        Range::closed_open(9, 12),
        Range::closed_open(14, 18),
        Range::closed_open(11, 13),
    ]
    .into_iter()
    .collect()
}

/// Overlapping ranges are merged when added.
#[test]
fn test_range_set_merges() {
    init_tracing();
    let hours = opening_hours();
    assert_eq!(format!("{hours:?}"), "[[9..13), [14..18)]");
    assert_range_set(&hours)
        .has_size(2)
        .is_not_empty()
        .contains(&[9, 12, 17])
        .contains_any_of(&[0, 10])
        .does_not_contain(&[13, 18])
        .encloses(&[Range::closed(9, 12)])
        .encloses_any_of(&[Range::closed(12, 15), Range::singleton(16)])
        .does_not_enclose(&[Range::closed(12, 14)])
        .intersects(&[Range::closed(12, 14), Range::at_least(17)])
        .intersects_any_of(&[Range::less_than(9), Range::open(13, 15)])
        .does_not_intersect(&[Range::closed_open(13, 14), Range::at_most(8)]);
}

/// Unbounded ranges and the empty set.
#[test]
fn test_unbounded_and_empty() {
    let everything: RangeSet<i64> = std::iter::once(Range::all()).collect();
    assert_range_set(&everything)
        .contains(&[i64::MIN, 0, i64::MAX])
        .encloses(&[Range::greater_than(0), Range::at_most(-5)]);

    let empty: RangeSet<i64> = RangeSet::new();
    assert_range_set(&empty).is_empty().has_size(0);
}

/// Values outside the set are listed.
#[test]
#[should_panic(expected = "Expecting:\n  [[9..13), [14..18)]\nto contain:\n  [8, 10, 13]\nbut could not find:\n  [8, 13]")]
fn test_range_set_contains_failure() {
    assert_range_set(&opening_hours()).contains(&[8, 10, 13]);
}

/// An empty look-for list against a non-empty set is an invalid argument.
#[test]
fn test_range_set_empty_look_for() {
    let hours = opening_hours();
    let info = AssertionInfo::new();

    let error = range_sets::assert_contains(&info, &hours, &[]).unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.to_string(), "The values to look for should not be empty");

    let empty: RangeSet<u32> = RangeSet::new();
    assert!(range_sets::assert_contains(&info, &empty, &[]).is_ok());
    assert!(range_sets::assert_does_not_intersect(&info, &empty, &[])
        .unwrap_err()
        .is_invalid_argument());
}

/// Inverted bounds are rejected when building a range.
#[test]
#[should_panic]
fn test_inverted_range() {
    let _ = Range::closed(5, 1);
}

fn date_time(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

/// Ordering checks on offset date-times compare instants.
#[test]
fn test_date_time_ordering() {
    let noon_paris = date_time("2024-06-01T12:00:00+02:00");
    let noon_utc = date_time("2024-06-01T12:00:00Z");

    assert_temporal(&noon_paris)
        .is_equal_to(&date_time("2024-06-01T10:00:00Z"))
        .is_before(&noon_utc)
        .is_before_or_equal_to(&noon_utc)
        .is_between(&date_time("2024-06-01T00:00:00Z"), &noon_utc)
        .is_close_to(&noon_utc, within(TimeDelta::hours(2)));
}

/// Periods include their bounds unless strict.
#[test]
fn test_periods() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    assert_temporal(&start)
        .is_between(&start, &end)
        .is_after_or_equal_to(&start);

    let error = temporals::assert_is_strictly_between(&AssertionInfo::new(), &start, &start, &end)
        .unwrap_err();
    assert!(error.is_assertion_failure());
    assert!(error.to_string().contains("to be in period:\n  (2024-01-01, 2024-01-31)"));
}

/// Closeness reports the actual distance.
#[test]
#[should_panic(expected = "to be close to:")]
fn test_not_close() {
    let a: NaiveDateTime = "2024-06-01T10:00:00".parse().unwrap();
    let b: NaiveDateTime = "2024-06-01T10:00:10".parse().unwrap();
    assert_temporal(&a).is_close_to(&b, by_less_than(TimeDelta::seconds(10)));
}

/// `within` accepts exactly the offset.
#[test]
fn test_within_boundary() {
    let a: NaiveDateTime = "2024-06-01T10:00:00".parse().unwrap();
    let b: NaiveDateTime = "2024-06-01T10:00:10".parse().unwrap();
    assert_temporal(&b).is_after(&a).is_close_to(&a, within(TimeDelta::seconds(10)));
}
