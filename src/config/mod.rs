//! Global configuration and per-assertion information.
//!
//! [`Configuration`] holds the settings read when failure messages are
//! rendered. It is installed process-wide with [`Configuration::apply`]:
//!
//! ```rust
//! use testkit_assert::config::Configuration;
//! use testkit_assert::diff::charset::Charset;
//!
//! Configuration::default()
//!     .with_max_elements_for_printing(10)
//!     .with_default_charset(Charset::Iso8859_1)
//!     .apply();
//!
//! assert_eq!(Configuration::current().max_elements_for_printing(), 10);
//! Configuration::reset();
//! ```
//!
//! [`AssertionInfo`] carries what a single assertion chain adds on top:
//! a description and an optional message overriding the generated one.

use parking_lot::{const_rwlock, RwLock};

use crate::diff::charset::Charset;
use crate::error::Error;

/// Default number of elements rendered in a listing before truncating.
pub const DEFAULT_MAX_ELEMENTS_FOR_PRINTING: usize = 1000;

static CURRENT: RwLock<Configuration> = const_rwlock(Configuration::DEFAULT);

/// Settings applied to every assertion in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    max_elements_for_printing: usize,
    default_charset: Charset,
}

impl Configuration {
    const DEFAULT: Configuration = Configuration {
        max_elements_for_printing: DEFAULT_MAX_ELEMENTS_FOR_PRINTING,
        default_charset: Charset::Utf8,
    };

    /// Set how many elements of a listing are rendered before `...`.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn with_max_elements_for_printing(mut self, max: usize) -> Self {
        self.max_elements_for_printing = max.max(1);
        self
    }

    /// Set the charset used by content checks without an explicit one.
    #[must_use]
    pub fn with_default_charset(mut self, charset: Charset) -> Self {
        self.default_charset = charset;
        self
    }

    /// Maximum number of elements rendered in a listing.
    pub fn max_elements_for_printing(&self) -> usize {
        self.max_elements_for_printing
    }

    /// Charset used by content checks without an explicit one.
    pub fn default_charset(&self) -> Charset {
        self.default_charset
    }

    /// Install this configuration for the whole process.
    pub fn apply(self) {
        tracing::debug!(?self, "applying assertion configuration");
        *CURRENT.write() = self;
    }

    /// The configuration currently in effect.
    pub fn current() -> Configuration {
        *CURRENT.read()
    }

    /// Restore the default configuration.
    pub fn reset() {
        Self::DEFAULT.apply();
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Information attached to one assertion chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionInfo {
    description: Option<String>,
    overriding_message: Option<String>,
}

impl AssertionInfo {
    /// Create an empty assertion info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description prefixed to failure messages.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Replace generated failure messages with `message`.
    pub fn set_overriding_message(&mut self, message: impl Into<String>) {
        self.overriding_message = Some(message.into());
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Build an assertion failure from a generated message.
    ///
    /// The overriding message wins over the generated one; the description,
    /// when set, is prefixed as `[description] `.
    pub fn failure(&self, message: impl Into<String>) -> Error {
        let message = match &self.overriding_message {
            Some(overriding) => overriding.clone(),
            None => message.into(),
        };
        match &self.description {
            Some(description) => Error::AssertionFailed(format!("[{description}] {message}")),
            None => Error::AssertionFailed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_without_description() {
        let info = AssertionInfo::new();
        assert_eq!(info.failure("boom").to_string(), "boom");
    }

    #[test]
    fn test_failure_with_description_and_override() {
        let mut info = AssertionInfo::new();
        info.set_description("config file");
        assert_eq!(info.failure("boom").to_string(), "[config file] boom");

        info.set_overriding_message("custom");
        assert_eq!(info.failure("boom").to_string(), "[config file] custom");
    }

    #[test]
    fn test_max_elements_is_at_least_one() {
        let config = Configuration::default().with_max_elements_for_printing(0);
        assert_eq!(config.max_elements_for_printing(), 1);
    }

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(
            config.max_elements_for_printing(),
            DEFAULT_MAX_ELEMENTS_FOR_PRINTING
        );
        assert_eq!(config.default_charset(), Charset::Utf8);
    }
}
