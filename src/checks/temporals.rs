//! Checks on temporal values.

use crate::config::AssertionInfo;
use crate::error::{Error, Result};
use crate::temporal::{Temporal, TemporalOffset};

fn compare<T: Temporal>(info: &AssertionInfo, actual: &T, holds: bool, relation: &str, other: &T) -> Result<()> {
    if holds {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {actual:?}\nto be {relation}:\n  {other:?}"
    )))
}

/// `actual` equals `expected`; date-times with an offset compare by instant.
pub fn assert_is_equal_to<T: Temporal>(info: &AssertionInfo, actual: &T, expected: &T) -> Result<()> {
    compare(info, actual, actual == expected, "equal to", expected)
}

/// `actual` is strictly before `other`.
pub fn assert_is_before<T: Temporal>(info: &AssertionInfo, actual: &T, other: &T) -> Result<()> {
    compare(info, actual, actual < other, "strictly before", other)
}

/// `actual` is before or equal to `other`.
pub fn assert_is_before_or_equal_to<T: Temporal>(info: &AssertionInfo, actual: &T, other: &T) -> Result<()> {
    compare(info, actual, actual <= other, "before or equal to", other)
}

/// `actual` is strictly after `other`.
pub fn assert_is_after<T: Temporal>(info: &AssertionInfo, actual: &T, other: &T) -> Result<()> {
    compare(info, actual, actual > other, "strictly after", other)
}

/// `actual` is after or equal to `other`.
pub fn assert_is_after_or_equal_to<T: Temporal>(info: &AssertionInfo, actual: &T, other: &T) -> Result<()> {
    compare(info, actual, actual >= other, "after or equal to", other)
}

/// `start <= actual <= end`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `end` is before `start`.
pub fn assert_is_between<T: Temporal>(info: &AssertionInfo, actual: &T, start: &T, end: &T) -> Result<()> {
    if end < start {
        return Err(Error::invalid_argument(format!(
            "The end value <{end:?}> must not be before the start value <{start:?}>!"
        )));
    }
    if start <= actual && actual <= end {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {actual:?}\nto be in period:\n  [{start:?}, {end:?}]"
    )))
}

/// `start < actual < end`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `start` is before `end`.
pub fn assert_is_strictly_between<T: Temporal>(info: &AssertionInfo, actual: &T, start: &T, end: &T) -> Result<()> {
    if end <= start {
        return Err(Error::invalid_argument(format!(
            "The end value <{end:?}> must be after the start value <{start:?}>!"
        )));
    }
    if start < actual && actual < end {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {actual:?}\nto be in period:\n  ({start:?}, {end:?})"
    )))
}

/// `actual` is within `offset` of `other`.
pub fn assert_is_close_to<T: Temporal>(
    info: &AssertionInfo,
    actual: &T,
    other: &T,
    offset: &TemporalOffset,
) -> Result<()> {
    if !offset.is_beyond(actual, other) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {actual:?}\nto be close to:\n  {other:?}\n{}",
        offset.describe_mismatch(actual, other)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::{by_less_than, within};
    use chrono::{FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_ordering() {
        let info = AssertionInfo::new();
        assert!(assert_is_before(&info, &day(1), &day(2)).is_ok());
        assert!(assert_is_before(&info, &day(2), &day(2)).is_err());
        assert!(assert_is_before_or_equal_to(&info, &day(2), &day(2)).is_ok());
        assert!(assert_is_after(&info, &day(3), &day(2)).is_ok());
        assert!(assert_is_after_or_equal_to(&info, &day(1), &day(2)).is_err());
    }

    #[test]
    fn test_between() {
        let info = AssertionInfo::new();
        assert!(assert_is_between(&info, &day(1), &day(1), &day(3)).is_ok());
        assert!(assert_is_strictly_between(&info, &day(1), &day(1), &day(3)).is_err());
        assert!(assert_is_strictly_between(&info, &day(2), &day(1), &day(3)).is_ok());
        assert!(assert_is_between(&info, &day(2), &day(3), &day(1))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_equal_by_instant() {
        let info = AssertionInfo::new();
        let offset = FixedOffset::east_opt(3600).unwrap();
        let a = offset.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap().with_timezone(&offset);
        assert!(assert_is_equal_to(&info, &a, &b).is_ok());
    }

    #[test]
    fn test_close_to() {
        let info = AssertionInfo::new();
        assert!(assert_is_close_to(&info, &day(1), &day(3), &within(TimeDelta::days(2))).is_ok());
        let err = assert_is_close_to(&info, &day(1), &day(3), &by_less_than(TimeDelta::days(2))).unwrap_err();
        assert!(err.to_string().contains("by less than"));
        assert!(err.to_string().contains("but difference was"));
    }
}
