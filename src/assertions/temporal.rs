//! Fluent assertions on dates, times and date-times.

use super::{descriptive, verify};
use crate::checks::temporals;
use crate::config::AssertionInfo;
use crate::temporal::{Temporal, TemporalOffset};

/// Create a temporal assertion builder for any [`Temporal`] value.
///
/// ```rust
/// use chrono::{NaiveDate, TimeDelta};
/// use testkit_assert::assertions::assert_temporal;
/// use testkit_assert::temporal::within;
///
/// let launch = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
///
/// assert_temporal(&launch)
///     .is_after(&start)
///     .is_between(&start, &end)
///     .is_close_to(&NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), within(TimeDelta::days(1)));
/// ```
pub fn assert_temporal<T: Temporal>(actual: &T) -> TemporalAssert<'_, T> {
    TemporalAssert {
        actual,
        info: AssertionInfo::new(),
    }
}

/// Fluent assertion builder for temporal values.
///
/// Created by [`assert_temporal`].
#[derive(Debug)]
pub struct TemporalAssert<'a, T> {
    actual: &'a T,
    info: AssertionInfo,
}

descriptive!(impl ['a, T] TemporalAssert<'a, T>);

impl<T: Temporal> TemporalAssert<'_, T> {
    /// Assert equality; date-times with a time zone compare by instant.
    #[track_caller]
    pub fn is_equal_to(self, expected: &T) -> Self {
        verify(temporals::assert_is_equal_to(&self.info, self.actual, expected));
        self
    }

    /// Assert the value is strictly before `other`.
    #[track_caller]
    pub fn is_before(self, other: &T) -> Self {
        verify(temporals::assert_is_before(&self.info, self.actual, other));
        self
    }

    /// Assert the value is before or equal to `other`.
    #[track_caller]
    pub fn is_before_or_equal_to(self, other: &T) -> Self {
        verify(temporals::assert_is_before_or_equal_to(&self.info, self.actual, other));
        self
    }

    /// Assert the value is strictly after `other`.
    #[track_caller]
    pub fn is_after(self, other: &T) -> Self {
        verify(temporals::assert_is_after(&self.info, self.actual, other));
        self
    }

    /// Assert the value is after or equal to `other`.
    #[track_caller]
    pub fn is_after_or_equal_to(self, other: &T) -> Self {
        verify(temporals::assert_is_after_or_equal_to(&self.info, self.actual, other));
        self
    }

    /// Assert `start <= value <= end`.
    ///
    /// # Panics
    ///
    /// Panics if the check fails or `end` is before `start`.
    #[track_caller]
    pub fn is_between(self, start: &T, end: &T) -> Self {
        verify(temporals::assert_is_between(&self.info, self.actual, start, end));
        self
    }

    /// Assert `start < value < end`.
    #[track_caller]
    pub fn is_strictly_between(self, start: &T, end: &T) -> Self {
        verify(temporals::assert_is_strictly_between(&self.info, self.actual, start, end));
        self
    }

    /// Assert the value is within `offset` of `other`, in either direction.
    #[track_caller]
    pub fn is_close_to(self, other: &T, offset: TemporalOffset) -> Self {
        verify(temporals::assert_is_close_to(&self.info, self.actual, other, &offset));
        self
    }
}
