//! Checks on range sets.

use std::fmt::Debug;

use crate::config::AssertionInfo;
use crate::error::Result;
use crate::range::{Range, RangeSet};
use crate::representation;

use super::check_look_for;

/// `actual` holds `expected` ranges.
pub fn assert_has_size<T: Ord + Debug>(info: &AssertionInfo, actual: &RangeSet<T>, expected: usize) -> Result<()> {
    if actual.len() == expected {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expected size: {expected} but was: {} in:\n{actual:?}",
        actual.len()
    )))
}

/// `actual` holds no range.
pub fn assert_is_empty<T: Ord + Debug>(info: &AssertionInfo, actual: &RangeSet<T>) -> Result<()> {
    if actual.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!("Expecting empty but was: {actual:?}")))
}

/// `actual` holds at least one range.
pub fn assert_is_not_empty<T: Ord>(info: &AssertionInfo, actual: &RangeSet<T>) -> Result<()> {
    if !actual.is_empty() {
        return Ok(());
    }
    Err(info.failure("Expecting actual not to be empty"))
}

// =============================================================================
// Values
// =============================================================================

/// Every value of `values` lies in `actual`.
pub fn assert_contains<T: Ord + Clone + Debug>(info: &AssertionInfo, actual: &RangeSet<T>, values: &[T]) -> Result<()> {
    require_all(info, actual, values, "values", "contain", |v| actual.contains(v))
}

/// At least one value of `values` lies in `actual`.
pub fn assert_contains_any_of<T: Ord + Clone + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    values: &[T],
) -> Result<()> {
    require_any(info, actual, values, "values", "contain", |v| actual.contains(v))
}

/// No value of `values` lies in `actual`.
pub fn assert_does_not_contain<T: Ord + Clone + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    values: &[T],
) -> Result<()> {
    require_none(info, actual, values, "values", "contain", |v| actual.contains(v))
}

// =============================================================================
// Ranges
// =============================================================================

/// Every range of `ranges` is enclosed by one range of `actual`.
pub fn assert_encloses<T: Ord + Debug>(info: &AssertionInfo, actual: &RangeSet<T>, ranges: &[Range<T>]) -> Result<()> {
    require_all(info, actual, ranges, "ranges", "enclose", |r| actual.encloses(r))
}

/// At least one range of `ranges` is enclosed by `actual`.
pub fn assert_encloses_any_of<T: Ord + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    ranges: &[Range<T>],
) -> Result<()> {
    require_any(info, actual, ranges, "ranges", "enclose", |r| actual.encloses(r))
}

/// No range of `ranges` is enclosed by `actual`.
pub fn assert_does_not_enclose<T: Ord + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    ranges: &[Range<T>],
) -> Result<()> {
    require_none(info, actual, ranges, "ranges", "enclose", |r| actual.encloses(r))
}

/// Every range of `ranges` shares a value with `actual`.
pub fn assert_intersects<T: Ord + Debug>(info: &AssertionInfo, actual: &RangeSet<T>, ranges: &[Range<T>]) -> Result<()> {
    require_all(info, actual, ranges, "ranges", "intersect", |r| actual.intersects(r))
}

/// At least one range of `ranges` shares a value with `actual`.
pub fn assert_intersects_any_of<T: Ord + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    ranges: &[Range<T>],
) -> Result<()> {
    require_any(info, actual, ranges, "ranges", "intersect", |r| actual.intersects(r))
}

/// No range of `ranges` shares a value with `actual`.
pub fn assert_does_not_intersect<T: Ord + Debug>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    ranges: &[Range<T>],
) -> Result<()> {
    require_none(info, actual, ranges, "ranges", "intersect", |r| actual.intersects(r))
}

// =============================================================================
// Shared reporting
// =============================================================================

fn require_all<T, X, F>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    look_for: &[X],
    what: &str,
    verb: &str,
    holds: F,
) -> Result<()>
where
    T: Ord + Debug,
    X: Debug,
    F: Fn(&X) -> bool,
{
    if check_look_for(look_for.len(), actual.ranges().is_empty(), what)? {
        return Ok(());
    }
    let missing: Vec<&X> = look_for.iter().filter(|x| !holds(x)).collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting:\n  {actual:?}\nto {verb}:\n  {}\nbut could not find:\n  {}",
        representation::debug_list(look_for),
        representation::debug_list(missing)
    )))
}

fn require_any<T, X, F>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    look_for: &[X],
    what: &str,
    verb: &str,
    holds: F,
) -> Result<()>
where
    T: Ord + Debug,
    X: Debug,
    F: Fn(&X) -> bool,
{
    if check_look_for(look_for.len(), actual.ranges().is_empty(), what)? {
        return Ok(());
    }
    if look_for.iter().any(holds) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting:\n  {actual:?}\nto {verb} at least one of the following elements:\n  {}\nbut none were found",
        representation::debug_list(look_for)
    )))
}

fn require_none<T, X, F>(
    info: &AssertionInfo,
    actual: &RangeSet<T>,
    look_for: &[X],
    what: &str,
    verb: &str,
    holds: F,
) -> Result<()>
where
    T: Ord + Debug,
    X: Debug,
    F: Fn(&X) -> bool,
{
    check_look_for(look_for.len(), false, what)?;
    let found: Vec<&X> = look_for.iter().filter(|x| holds(x)).collect();
    if found.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting:\n  {actual:?}\nnot to {verb}:\n  {}\nbut found:\n  {}",
        representation::debug_list(look_for),
        representation::debug_list(found)
    )))
}
