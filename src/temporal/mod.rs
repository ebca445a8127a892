//! Temporal values and closeness offsets.
//!
//! [`Temporal`] is implemented for the chrono types the temporal
//! assertions accept. Date-times with a time zone are compared by instant,
//! so `10:00+02:00` equals `08:00Z`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// A point in time that can be ordered and subtracted.
pub trait Temporal: Clone + PartialOrd + fmt::Debug {
    /// Signed time elapsed from `earlier` to `self`.
    fn duration_since(&self, earlier: &Self) -> TimeDelta;
}

impl<Tz: TimeZone> Temporal for DateTime<Tz> {
    fn duration_since(&self, earlier: &Self) -> TimeDelta {
        self.clone().signed_duration_since(earlier.clone())
    }
}

impl Temporal for NaiveDateTime {
    fn duration_since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }
}

impl Temporal for NaiveDate {
    fn duration_since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }
}

impl Temporal for NaiveTime {
    fn duration_since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }
}

/// How far apart two temporal values may be to count as close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalOffset {
    /// The distance is at most the given delta.
    Within(TimeDelta),
    /// The distance is strictly below the given delta.
    ByLessThan(TimeDelta),
}

/// Offset accepting a distance up to and including `delta`.
///
/// ```rust
/// use chrono::{NaiveTime, TimeDelta};
/// use testkit_assert::temporal::within;
///
/// let a = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let b = NaiveTime::from_hms_opt(10, 0, 5).unwrap();
/// assert!(!within(TimeDelta::seconds(5)).is_beyond(&a, &b));
/// ```
pub fn within(delta: TimeDelta) -> TemporalOffset {
    TemporalOffset::Within(delta)
}

/// Offset accepting a distance strictly below `delta`.
pub fn by_less_than(delta: TimeDelta) -> TemporalOffset {
    TemporalOffset::ByLessThan(delta)
}

impl TemporalOffset {
    /// The delta of this offset.
    pub fn delta(&self) -> TimeDelta {
        match self {
            Self::Within(delta) | Self::ByLessThan(delta) => *delta,
        }
    }

    /// Whether `actual` and `other` are further apart than allowed.
    pub fn is_beyond<T: Temporal>(&self, actual: &T, other: &T) -> bool {
        let distance = distance(actual, other);
        match self {
            Self::Within(delta) => distance > *delta,
            Self::ByLessThan(delta) => distance >= *delta,
        }
    }

    /// Describe the offset and the distance that exceeded it.
    pub fn describe_mismatch<T: Temporal>(&self, actual: &T, other: &T) -> String {
        format!("{self} but difference was {}", distance(actual, other))
    }
}

impl fmt::Display for TemporalOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within(delta) => write!(f, "within {delta}"),
            Self::ByLessThan(delta) => write!(f, "by less than {delta}"),
        }
    }
}

/// Absolute distance between two temporal values.
pub fn distance<T: Temporal>(a: &T, b: &T) -> TimeDelta {
    let delta = a.duration_since(b);
    if delta < TimeDelta::zero() {
        -delta
    } else {
        delta
    }
}
