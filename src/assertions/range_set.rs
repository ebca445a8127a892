//! Fluent assertions on range sets.

use std::fmt::Debug;

use super::{descriptive, verify};
use crate::checks::range_sets;
use crate::config::AssertionInfo;
use crate::range::{Range, RangeSet};

/// Create a range set assertion builder.
///
/// ```rust
/// use testkit_assert::assertions::assert_range_set;
/// use testkit_assert::range::{Range, RangeSet};
///
/// let set: RangeSet<i32> = [Range::closed(1, 10), Range::closed(20, 30)].into_iter().collect();
/// assert_range_set(&set)
///     .has_size(2)
///     .contains(&[1, 5, 25])
///     .does_not_contain(&[15])
///     .encloses(&[Range::closed(2, 4)])
///     .intersects(&[Range::open(8, 22)]);
/// ```
pub fn assert_range_set<T: Ord>(actual: &RangeSet<T>) -> RangeSetAssert<'_, T> {
    RangeSetAssert {
        actual,
        info: AssertionInfo::new(),
    }
}

/// Fluent assertion builder for range sets.
///
/// Created by [`assert_range_set`]. Methods taking a slice check each
/// element against the set; the `*_ranges_of` and `*_all` forms take the
/// ranges of another set.
#[derive(Debug)]
pub struct RangeSetAssert<'a, T> {
    actual: &'a RangeSet<T>,
    info: AssertionInfo,
}

descriptive!(impl ['a, T] RangeSetAssert<'a, T>);

impl<T: Ord + Clone + Debug> RangeSetAssert<'_, T> {
    /// Assert the set holds `expected` disjoint ranges.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self {
        verify(range_sets::assert_has_size(&self.info, self.actual, expected));
        self
    }

    /// Assert the set holds no range.
    #[track_caller]
    pub fn is_empty(self) -> Self {
        verify(range_sets::assert_is_empty(&self.info, self.actual));
        self
    }

    /// Assert the set holds at least one range.
    #[track_caller]
    pub fn is_not_empty(self) -> Self {
        verify(range_sets::assert_is_not_empty(&self.info, self.actual));
        self
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Assert every value lies in the set.
    #[track_caller]
    pub fn contains(self, values: &[T]) -> Self {
        verify(range_sets::assert_contains(&self.info, self.actual, values));
        self
    }

    /// Assert every value yielded by `values` lies in the set.
    #[track_caller]
    pub fn contains_all(self, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        self.contains(&values)
    }

    /// Assert at least one value lies in the set.
    #[track_caller]
    pub fn contains_any_of(self, values: &[T]) -> Self {
        verify(range_sets::assert_contains_any_of(&self.info, self.actual, values));
        self
    }

    /// Assert no value lies in the set.
    #[track_caller]
    pub fn does_not_contain(self, values: &[T]) -> Self {
        verify(range_sets::assert_does_not_contain(&self.info, self.actual, values));
        self
    }

    /// Assert no value yielded by `values` lies in the set.
    #[track_caller]
    pub fn does_not_contain_all(self, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        self.does_not_contain(&values)
    }

    // -------------------------------------------------------------------------
    // Enclosing
    // -------------------------------------------------------------------------

    /// Assert every range is enclosed by one range of the set.
    #[track_caller]
    pub fn encloses(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_encloses(&self.info, self.actual, ranges));
        self
    }

    /// Assert every range of `other` is enclosed by the set.
    #[track_caller]
    pub fn encloses_all(self, other: &RangeSet<T>) -> Self {
        self.encloses(other.ranges())
    }

    /// Assert at least one range is enclosed by the set.
    #[track_caller]
    pub fn encloses_any_of(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_encloses_any_of(&self.info, self.actual, ranges));
        self
    }

    /// Assert at least one range of `other` is enclosed by the set.
    #[track_caller]
    pub fn encloses_any_ranges_of(self, other: &RangeSet<T>) -> Self {
        self.encloses_any_of(other.ranges())
    }

    /// Assert no range is enclosed by the set.
    #[track_caller]
    pub fn does_not_enclose(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_does_not_enclose(&self.info, self.actual, ranges));
        self
    }

    /// Assert no range of `other` is enclosed by the set.
    #[track_caller]
    pub fn does_not_enclose_any_ranges_of(self, other: &RangeSet<T>) -> Self {
        self.does_not_enclose(other.ranges())
    }

    // -------------------------------------------------------------------------
    // Intersecting
    // -------------------------------------------------------------------------

    /// Assert every range shares a value with the set.
    #[track_caller]
    pub fn intersects(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_intersects(&self.info, self.actual, ranges));
        self
    }

    /// Assert every range of `other` shares a value with the set.
    #[track_caller]
    pub fn intersects_all(self, other: &RangeSet<T>) -> Self {
        self.intersects(other.ranges())
    }

    /// Assert at least one range shares a value with the set.
    #[track_caller]
    pub fn intersects_any_of(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_intersects_any_of(&self.info, self.actual, ranges));
        self
    }

    /// Assert at least one range of `other` shares a value with the set.
    #[track_caller]
    pub fn intersects_any_ranges_of(self, other: &RangeSet<T>) -> Self {
        self.intersects_any_of(other.ranges())
    }

    /// Assert no range shares a value with the set.
    #[track_caller]
    pub fn does_not_intersect(self, ranges: &[Range<T>]) -> Self {
        verify(range_sets::assert_does_not_intersect(&self.info, self.actual, ranges));
        self
    }

    /// Assert no range of `other` shares a value with the set.
    #[track_caller]
    pub fn does_not_intersect_any_ranges_of(self, other: &RangeSet<T>) -> Self {
        self.does_not_intersect(other.ranges())
    }
}
