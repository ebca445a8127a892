//! Ranges over ordered values and sets of disjoint ranges.
//!
//! A [`Range`] is delimited by two cuts: positions between values of the
//! ordered domain. Comparing cuts rather than values makes open, closed
//! and unbounded ends uniform, and makes an empty range such as `[1..1)`
//! an ordinary value.
//!
//! A [`RangeSet`] keeps its ranges sorted and merges connected ranges on
//! insertion, so `[1..3)` and `[3..5]` are stored as `[1..5]`.
//!
//! ```rust
//! use testkit_assert::range::{Range, RangeSet};
//!
//! let set: RangeSet<i32> = [Range::closed(1, 3), Range::closed_open(3, 6)].into_iter().collect();
//! assert_eq!(set.len(), 1);
//! assert!(set.contains(&5));
//! assert!(!set.contains(&6));
//! assert_eq!(set.to_string(), "[[1..6)]");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{self, Bound};

/// A position between two values of an ordered domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Cut<T> {
    BelowAll,
    Below(T),
    Above(T),
    AboveAll,
}

impl<T: Ord> Ord for Cut<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cut::BelowAll, Cut::BelowAll) | (Cut::AboveAll, Cut::AboveAll) => Ordering::Equal,
            (Cut::BelowAll, _) | (_, Cut::AboveAll) => Ordering::Less,
            (_, Cut::BelowAll) | (Cut::AboveAll, _) => Ordering::Greater,
            (Cut::Below(a), Cut::Below(b)) | (Cut::Above(a), Cut::Above(b)) => a.cmp(b),
            (Cut::Below(a), Cut::Above(b)) => {
                if a <= b {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Cut::Above(a), Cut::Below(b)) => {
                if a < b {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl<T: Ord> PartialOrd for Cut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Cut<T> {
    fn lower(bound: Bound<T>) -> Self {
        match bound {
            Bound::Included(v) => Cut::Below(v),
            Bound::Excluded(v) => Cut::Above(v),
            Bound::Unbounded => Cut::BelowAll,
        }
    }

    fn upper(bound: Bound<T>) -> Self {
        match bound {
            Bound::Included(v) => Cut::Above(v),
            Bound::Excluded(v) => Cut::Below(v),
            Bound::Unbounded => Cut::AboveAll,
        }
    }
}

/// A contiguous span of an ordered domain.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Cut<T>,
    upper: Cut<T>,
}

impl<T: Ord> Range<T> {
    /// Build a range from its two bounds.
    ///
    /// # Panics
    ///
    /// Panics when the lower bound lies above the upper bound, as in
    /// `(1..1)` or `[3..1]`.
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        let lower = Cut::lower(lower);
        let upper = Cut::upper(upper);
        assert!(lower <= upper, "Invalid range: lower bound lies above upper bound");
        Self { lower, upper }
    }

    /// `[lower..upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Included(upper))
    }

    /// `(lower..upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Excluded(upper))
    }

    /// `[lower..upper)`
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Excluded(upper))
    }

    /// `(lower..upper]`
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Included(upper))
    }

    /// `[lower..+∞)`
    pub fn at_least(lower: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Unbounded)
    }

    /// `(lower..+∞)`
    pub fn greater_than(lower: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Unbounded)
    }

    /// `(-∞..upper]`
    pub fn at_most(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(upper))
    }

    /// `(-∞..upper)`
    pub fn less_than(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(upper))
    }

    /// `(-∞..+∞)`
    pub fn all() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// `[value..value]`
    pub fn singleton(value: T) -> Self
    where
        T: Clone,
    {
        Self::closed(value.clone(), value)
    }

    /// Whether the range holds no value, as `[1..1)` does.
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Clone,
    {
        self.lower <= Cut::Below(value.clone()) && Cut::Above(value.clone()) <= self.upper
    }

    /// Whether every value of `other` lies within this range.
    pub fn encloses(&self, other: &Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Whether the two ranges overlap or touch, so that their union is a range.
    pub fn is_connected(&self, other: &Self) -> bool {
        self.lower.max_ref(&other.lower) <= self.upper.min_ref(&other.upper)
    }

    /// Whether the two ranges share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower.max_ref(&other.lower) < self.upper.min_ref(&other.upper)
    }
}

impl<T: Ord> Cut<T> {
    fn max_ref<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self >= other {
            self
        } else {
            other
        }
    }

    fn min_ref<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self <= other {
            self
        } else {
            other
        }
    }
}

impl<T: Ord> From<ops::Range<T>> for Range<T> {
    fn from(range: ops::Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T: Ord> From<ops::RangeInclusive<T>> for Range<T> {
    fn from(range: ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T: Ord> From<ops::RangeFrom<T>> for Range<T> {
    fn from(range: ops::RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T: Ord> From<ops::RangeTo<T>> for Range<T> {
    fn from(range: ops::RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T: Ord> From<ops::RangeToInclusive<T>> for Range<T> {
    fn from(range: ops::RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T: Ord> From<ops::RangeFull> for Range<T> {
    fn from(_: ops::RangeFull) -> Self {
        Self::all()
    }
}

impl<T> Range<T> {
    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        match &self.lower {
            Cut::BelowAll => f.write_str("(-∞")?,
            Cut::Below(v) => {
                f.write_str("[")?;
                value(v, f)?;
            }
            Cut::Above(v) => {
                f.write_str("(")?;
                value(v, f)?;
            }
            Cut::AboveAll => f.write_str("(+∞")?,
        }
        f.write_str("..")?;
        match &self.upper {
            Cut::BelowAll => f.write_str("-∞)"),
            Cut::Below(v) => {
                value(v, f)?;
                f.write_str(")")
            }
            Cut::Above(v) => {
                value(v, f)?;
                f.write_str("]")
            }
            Cut::AboveAll => f.write_str("+∞)"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Debug::fmt(v, f))
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Display::fmt(v, f))
    }
}

/// A set of disjoint, non-empty, non-adjacent ranges, kept sorted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<T> {
    ranges: Vec<Range<T>>,
}

impl<T: Ord> RangeSet<T> {
    /// Create an empty range set.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Add `range`, merging it with every range it is connected to.
    ///
    /// Empty ranges are ignored.
    pub fn add(&mut self, range: Range<T>) {
        if range.is_empty() {
            return;
        }
        let mut merged = range;
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for existing in self.ranges.drain(..) {
            if existing.is_connected(&merged) {
                let Range { lower, upper } = existing;
                if lower < merged.lower {
                    merged.lower = lower;
                }
                if upper > merged.upper {
                    merged.upper = upper;
                }
            } else {
                kept.push(existing);
            }
        }
        let position = kept
            .iter()
            .position(|r| r.lower > merged.lower)
            .unwrap_or(kept.len());
        kept.insert(position, merged);
        self.ranges = kept;
    }

    /// The ranges of the set, in ascending order.
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    /// Number of disjoint ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the set holds no range.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `value` lies in one of the ranges.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Clone,
    {
        self.ranges.iter().any(|r| r.contains(value))
    }

    /// Whether one range of the set encloses all of `range`.
    pub fn encloses(&self, range: &Range<T>) -> bool {
        self.ranges.iter().any(|r| r.encloses(range))
    }

    /// Whether the set and `range` share at least one value.
    pub fn intersects(&self, range: &Range<T>) -> bool {
        self.ranges.iter().any(|r| r.overlaps(range))
    }
}

impl<T: Ord> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<Range<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        for range in iter {
            set.add(range);
        }
        set
    }
}

impl<T: Ord> Extend<Range<T>> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.ranges).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        f.write_str("]")
    }
}
