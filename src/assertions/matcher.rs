// Matcher factories are meant to be handed straight to an assertion
#![allow(clippy::must_use_candidate)]

//! Matchers: reusable, self-describing conditions.
//!
//! Matchers are what the fluent assertions accept wherever a condition is
//! needed: directory filters, map entry conditions, or plain values through
//! [`assert_that!`](crate::assert_that).
//!
//! - [`Matcher`] trait for custom matchers
//! - Equality and ordering: [`eq`], [`gt`], [`ge`], [`lt`], [`le`]
//! - Text: [`contains_str`], [`starts_with`], [`ends_with`]
//! - Paths: [`has_file_name`], [`has_extension`]
//! - Predicates: [`satisfies`]
//! - Combinators: [`all_of`], [`any_of`], [`not`]
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use testkit_assert::assertions::matcher::{eq, has_extension, not, Matcher};
//!
//! assert!(eq(42).matches(&42));
//! assert!(not(eq(0)).matches(&1));
//! assert!(has_extension("rs").matches(Path::new("src/lib.rs")));
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;
use std::path::Path;

use crate::path;

/// A condition on values of type `T`.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use testkit_assert::assertions::matcher::Matcher;
///
/// struct IsEven;
///
/// impl Matcher<i32> for IsEven {
///     fn matches(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "is even".to_string()
///     }
///
///     fn describe_mismatch(&self, value: &i32) -> String {
///         format!("{} is not even", value)
///     }
/// }
///
/// assert!(IsEven.matches(&4));
/// assert!(!IsEven.matches(&3));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Describe what this matcher expects.
    fn describe(&self) -> String;

    /// Describe why a value didn't match.
    fn describe_mismatch(&self, value: &T) -> String;
}

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with the mismatch description if the value doesn't match.
///
/// # Example
///
/// ```rust
/// use testkit_assert::{assert_that, assertions::matcher::eq};
///
/// assert_that!(42, eq(42));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr) => {{
        let value = &$value;
        let matcher = &$matcher;
        if !$crate::assertions::matcher::Matcher::matches(matcher, value) {
            panic!(
                "assertion failed: {}\n  expected: {}\n  got: {:?}",
                $crate::assertions::matcher::Matcher::describe_mismatch(matcher, value),
                $crate::assertions::matcher::Matcher::describe(matcher),
                value
            );
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        let matcher = &$matcher;
        if !$crate::assertions::matcher::Matcher::matches(matcher, value) {
            panic!(
                "assertion failed: {}\n  expected: {}\n  got: {:?}\n  message: {}",
                $crate::assertions::matcher::Matcher::describe_mismatch(matcher, value),
                $crate::assertions::matcher::Matcher::describe(matcher),
                value,
                format_args!($($arg)+)
            );
        }
    }};
}

// =============================================================================
// Comparisons
// =============================================================================

/// Equality matcher.
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, eq};
///
/// assert!(eq("Yoda").matches(&"Yoda"));
/// assert!(!eq(42).matches(&0));
/// ```
pub fn eq<T: PartialEq + Debug>(expected: T) -> EqMatcher<T> {
    EqMatcher { expected }
}

/// Matcher for equality.
#[derive(Debug, Clone)]
pub struct EqMatcher<T> {
    expected: T,
}

impl<T: PartialEq + Debug> Matcher<T> for EqMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        value == &self.expected
    }

    fn describe(&self) -> String {
        format!("equals {:?}", self.expected)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value:?} does not equal {:?}", self.expected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    fn holds<T: PartialOrd + ?Sized>(self, value: &T, reference: &T) -> bool {
        match self {
            Self::Gt => value > reference,
            Self::Ge => value >= reference,
            Self::Lt => value < reference,
            Self::Le => value <= reference,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Gt => "greater than",
            Self::Ge => "greater than or equal to",
            Self::Lt => "less than",
            Self::Le => "less than or equal to",
        }
    }
}

/// Matcher ordering values against a threshold.
#[derive(Debug, Clone)]
pub struct CompareMatcher<T> {
    reference: T,
    comparison: Comparison,
}

impl<T: PartialOrd + Debug> Matcher<T> for CompareMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.comparison.holds(value, &self.reference)
    }

    fn describe(&self) -> String {
        format!("is {} {:?}", self.comparison.phrase(), self.reference)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!(
            "{value:?} is not {} {:?}",
            self.comparison.phrase(),
            self.reference
        )
    }
}

/// Greater-than matcher.
pub fn gt<T: PartialOrd + Debug>(threshold: T) -> CompareMatcher<T> {
    CompareMatcher {
        reference: threshold,
        comparison: Comparison::Gt,
    }
}

/// Greater-than-or-equal matcher.
pub fn ge<T: PartialOrd + Debug>(threshold: T) -> CompareMatcher<T> {
    CompareMatcher {
        reference: threshold,
        comparison: Comparison::Ge,
    }
}

/// Less-than matcher.
pub fn lt<T: PartialOrd + Debug>(threshold: T) -> CompareMatcher<T> {
    CompareMatcher {
        reference: threshold,
        comparison: Comparison::Lt,
    }
}

/// Less-than-or-equal matcher.
pub fn le<T: PartialOrd + Debug>(threshold: T) -> CompareMatcher<T> {
    CompareMatcher {
        reference: threshold,
        comparison: Comparison::Le,
    }
}

// =============================================================================
// Text
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextRule {
    Contains,
    StartsWith,
    EndsWith,
}

/// Matcher for substrings of text values.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    fragment: String,
    rule: TextRule,
}

impl TextMatcher {
    fn check(&self, value: &str) -> bool {
        match self.rule {
            TextRule::Contains => value.contains(&self.fragment),
            TextRule::StartsWith => value.starts_with(&self.fragment),
            TextRule::EndsWith => value.ends_with(&self.fragment),
        }
    }

    fn verb(&self) -> (&'static str, &'static str) {
        match self.rule {
            TextRule::Contains => ("contains", "does not contain"),
            TextRule::StartsWith => ("starts with", "does not start with"),
            TextRule::EndsWith => ("ends with", "does not end with"),
        }
    }
}

impl Matcher<str> for TextMatcher {
    fn matches(&self, value: &str) -> bool {
        self.check(value)
    }

    fn describe(&self) -> String {
        format!("{} {:?}", self.verb().0, self.fragment)
    }

    fn describe_mismatch(&self, value: &str) -> String {
        format!("{value:?} {} {:?}", self.verb().1, self.fragment)
    }
}

impl Matcher<String> for TextMatcher {
    fn matches(&self, value: &String) -> bool {
        self.check(value)
    }

    fn describe(&self) -> String {
        <Self as Matcher<str>>::describe(self)
    }

    fn describe_mismatch(&self, value: &String) -> String {
        <Self as Matcher<str>>::describe_mismatch(self, value)
    }
}

impl Matcher<&str> for TextMatcher {
    fn matches(&self, value: &&str) -> bool {
        self.check(value)
    }

    fn describe(&self) -> String {
        <Self as Matcher<str>>::describe(self)
    }

    fn describe_mismatch(&self, value: &&str) -> String {
        <Self as Matcher<str>>::describe_mismatch(self, value)
    }
}

/// Substring matcher.
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, contains_str};
///
/// assert!(contains_str("world").matches("hello world"));
/// ```
pub fn contains_str(fragment: &str) -> TextMatcher {
    TextMatcher {
        fragment: fragment.to_string(),
        rule: TextRule::Contains,
    }
}

/// Prefix matcher.
pub fn starts_with(prefix: &str) -> TextMatcher {
    TextMatcher {
        fragment: prefix.to_string(),
        rule: TextRule::StartsWith,
    }
}

/// Suffix matcher.
pub fn ends_with(suffix: &str) -> TextMatcher {
    TextMatcher {
        fragment: suffix.to_string(),
        rule: TextRule::EndsWith,
    }
}

// =============================================================================
// Paths
// =============================================================================

/// Matcher on the last segment of a path.
#[derive(Debug, Clone)]
pub struct FileNameMatcher {
    expected: String,
    extension_only: bool,
}

impl FileNameMatcher {
    fn actual(&self, value: &Path) -> Option<String> {
        if self.extension_only {
            path::extension(value)
        } else {
            path::file_name(value)
        }
    }
}

impl Matcher<Path> for FileNameMatcher {
    fn matches(&self, value: &Path) -> bool {
        self.actual(value).as_deref() == Some(self.expected.as_str())
    }

    fn describe(&self) -> String {
        if self.extension_only {
            format!("has extension {:?}", self.expected)
        } else {
            format!("has file name {:?}", self.expected)
        }
    }

    fn describe_mismatch(&self, value: &Path) -> String {
        let what = if self.extension_only {
            "extension"
        } else {
            "file name"
        };
        match self.actual(value) {
            Some(actual) => format!("{} has {what} {actual:?}", value.display()),
            None => format!("{} has no {what}", value.display()),
        }
    }
}

/// Matches paths whose last segment is `name`.
///
/// ```rust
/// use std::path::Path;
/// use testkit_assert::assertions::matcher::{Matcher, has_file_name};
///
/// assert!(has_file_name("Cargo.toml").matches(Path::new("/work/Cargo.toml")));
/// ```
pub fn has_file_name(name: &str) -> FileNameMatcher {
    FileNameMatcher {
        expected: name.to_string(),
        extension_only: false,
    }
}

/// Matches paths whose file name has the extension `extension`.
pub fn has_extension(extension: &str) -> FileNameMatcher {
    FileNameMatcher {
        expected: extension.to_string(),
        extension_only: true,
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Predicate-based matcher.
///
/// ```rust
/// use std::path::Path;
/// use testkit_assert::assertions::matcher::{Matcher, satisfies};
///
/// let m = satisfies(|x: &i32| *x % 2 == 0, "is even");
/// assert!(m.matches(&4));
///
/// let hidden = satisfies(|p: &Path| p.to_string_lossy().contains("/."), "is hidden");
/// assert!(hidden.matches(Path::new("/home/.cache")));
/// ```
pub fn satisfies<T, F>(predicate: F, description: &str) -> PredicateMatcher<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    PredicateMatcher {
        predicate,
        description: description.to_string(),
        _marker: PhantomData,
    }
}

/// Matcher based on a predicate function.
pub struct PredicateMatcher<T: ?Sized, F> {
    predicate: F,
    description: String,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Debug + ?Sized, F: Fn(&T) -> bool> Matcher<T> for PredicateMatcher<T, F> {
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value:?} does not satisfy: {}", self.description)
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Matches when all matchers match.
///
/// Matchers of different types can be mixed once boxed.
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, all_of, gt, lt};
///
/// let m = all_of(vec![Box::new(gt(0)) as Box<dyn Matcher<i32>>, Box::new(lt(100))]);
/// assert!(m.matches(&50));
/// assert!(!m.matches(&0));
/// ```
pub fn all_of<T, M>(matchers: Vec<M>) -> AllOfMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + 'static,
{
    AllOfMatcher {
        matchers: boxed(matchers),
    }
}

/// Matcher that requires all inner matchers to match.
pub struct AllOfMatcher<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T: ?Sized> Matcher<T> for AllOfMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        format!("all of [{}]", descriptions(&self.matchers))
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let failures: Vec<_> = self
            .matchers
            .iter()
            .filter(|m| !m.matches(value))
            .map(|m| m.describe_mismatch(value))
            .collect();
        format!("failed: {}", failures.join("; "))
    }
}

/// Matches when any matcher matches.
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, any_of, eq};
///
/// let m = any_of(vec![eq(1), eq(2), eq(3)]);
/// assert!(m.matches(&2));
/// assert!(!m.matches(&4));
/// ```
pub fn any_of<T, M>(matchers: Vec<M>) -> AnyOfMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + 'static,
{
    AnyOfMatcher {
        matchers: boxed(matchers),
    }
}

/// Matcher that requires at least one inner matcher to match.
pub struct AnyOfMatcher<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T: ?Sized> Matcher<T> for AnyOfMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().any(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        format!("any of [{}]", descriptions(&self.matchers))
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let failures: Vec<_> = self
            .matchers
            .iter()
            .map(|m| m.describe_mismatch(value))
            .collect();
        format!("matched none of: {}", failures.join("; "))
    }
}

/// Negating matcher.
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, not, eq};
///
/// assert!(not(eq(0)).matches(&1));
/// ```
pub fn not<T, M>(matcher: M) -> NotMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + 'static,
{
    NotMatcher {
        inner: Box::new(matcher),
    }
}

/// Matcher that negates another matcher.
pub struct NotMatcher<T: ?Sized> {
    inner: Box<dyn Matcher<T>>,
}

impl<T: ?Sized> Matcher<T> for NotMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, _value: &T) -> String {
        format!("unexpectedly matched: {}", self.inner.describe())
    }
}

impl<T: ?Sized> Matcher<T> for Box<dyn Matcher<T>> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }
}

fn boxed<T: ?Sized, M: Matcher<T> + 'static>(matchers: Vec<M>) -> Vec<Box<dyn Matcher<T>>> {
    matchers
        .into_iter()
        .map(|m| Box::new(m) as Box<dyn Matcher<T>>)
        .collect()
}

fn descriptions<T: ?Sized>(matchers: &[Box<dyn Matcher<T>>]) -> String {
    matchers
        .iter()
        .map(|m| m.describe())
        .collect::<Vec<_>>()
        .join(", ")
}
