//! Fluent assertions on URLs.

use url::Url;

use super::{descriptive, verify};
use crate::checks::uris;
use crate::config::AssertionInfo;
use crate::diff::parameters::ParameterMap;

/// Create a URL assertion builder.
///
/// ```rust
/// use testkit_assert::assertions::assert_uri;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/search?q=rust&lang=en&lang=fr").unwrap();
/// assert_uri(&url)
///     .has_scheme("https")
///     .has_no_port()
///     .has_parameter_value("lang", "fr")
///     .contains_exactly_parameters(&[("lang", Some("fr")), ("q", Some("rust")), ("lang", Some("en"))]);
/// ```
pub fn assert_uri(actual: &Url) -> UriAssert<'_> {
    UriAssert {
        actual,
        info: AssertionInfo::new(),
    }
}

/// Fluent assertion builder for URLs.
///
/// Created by [`assert_uri`].
#[derive(Debug)]
pub struct UriAssert<'a> {
    actual: &'a Url,
    info: AssertionInfo,
}

descriptive!(impl ['a] UriAssert<'a>);

impl UriAssert<'_> {
    /// Assert the scheme.
    #[track_caller]
    pub fn has_scheme(self, expected: &str) -> Self {
        verify(uris::assert_has_scheme(&self.info, self.actual, expected));
        self
    }

    /// Assert the path.
    #[track_caller]
    pub fn has_path(self, expected: &str) -> Self {
        verify(uris::assert_has_path(&self.info, self.actual, expected));
        self
    }

    /// Assert the explicit port; default ports of the scheme are absent.
    #[track_caller]
    pub fn has_port(self, expected: u16) -> Self {
        verify(uris::assert_has_port(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert there is no explicit port.
    #[track_caller]
    pub fn has_no_port(self) -> Self {
        verify(uris::assert_has_port(&self.info, self.actual, None));
        self
    }

    /// Assert the host.
    #[track_caller]
    pub fn has_host(self, expected: &str) -> Self {
        verify(uris::assert_has_host(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert there is no host, as in `mailto:` URLs.
    #[track_caller]
    pub fn has_no_host(self) -> Self {
        verify(uris::assert_has_host(&self.info, self.actual, None));
        self
    }

    /// Assert the authority, `user:password@host:port`.
    #[track_caller]
    pub fn has_authority(self, expected: &str) -> Self {
        verify(uris::assert_has_authority(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert the user info, `user` or `user:password`.
    #[track_caller]
    pub fn has_user_info(self, expected: &str) -> Self {
        verify(uris::assert_has_user_info(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert there is no user info.
    #[track_caller]
    pub fn has_no_user_info(self) -> Self {
        verify(uris::assert_has_user_info(&self.info, self.actual, None));
        self
    }

    /// Assert the fragment.
    #[track_caller]
    pub fn has_fragment(self, expected: &str) -> Self {
        verify(uris::assert_has_fragment(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert there is no fragment.
    #[track_caller]
    pub fn has_no_fragment(self) -> Self {
        verify(uris::assert_has_fragment(&self.info, self.actual, None));
        self
    }

    /// Assert the raw query.
    #[track_caller]
    pub fn has_query(self, expected: &str) -> Self {
        verify(uris::assert_has_query(&self.info, self.actual, Some(expected)));
        self
    }

    /// Assert there is no query.
    #[track_caller]
    pub fn has_no_query(self) -> Self {
        verify(uris::assert_has_query(&self.info, self.actual, None));
        self
    }

    /// Assert a parameter named `name` is present.
    #[track_caller]
    pub fn has_parameter(self, name: &str) -> Self {
        verify(uris::assert_has_parameter(&self.info, self.actual, name));
        self
    }

    /// Assert the parameter `name` holds `value`; pass `None` for a
    /// parameter given without `=`.
    #[track_caller]
    pub fn has_parameter_value<'v>(self, name: &str, value: impl Into<Option<&'v str>>) -> Self {
        verify(uris::assert_has_parameter_with_value(
            &self.info,
            self.actual,
            name,
            value.into(),
        ));
        self
    }

    /// Assert no parameter named `name` is present.
    #[track_caller]
    pub fn has_no_parameter(self, name: &str) -> Self {
        verify(uris::assert_has_no_parameter(&self.info, self.actual, name));
        self
    }

    /// Assert the parameter `name` does not hold `value`.
    #[track_caller]
    pub fn has_no_parameter_value<'v>(self, name: &str, value: impl Into<Option<&'v str>>) -> Self {
        verify(uris::assert_has_no_parameter_with_value(
            &self.info,
            self.actual,
            name,
            value.into(),
        ));
        self
    }

    /// Assert there are no query parameters.
    #[track_caller]
    pub fn has_no_parameters(self) -> Self {
        verify(uris::assert_has_no_parameters(&self.info, self.actual));
        self
    }

    /// Assert the query parameters are exactly `expected`, in any order.
    #[track_caller]
    pub fn contains_exactly_parameters(self, expected: &[(&str, Option<&str>)]) -> Self {
        verify(uris::assert_contains_exactly_parameter_entries(
            &self.info,
            self.actual,
            expected,
        ));
        self
    }

    /// Assert the query parameters are exactly those of `expected`.
    #[track_caller]
    pub fn contains_exactly_parameter_map(self, expected: &ParameterMap) -> Self {
        verify(uris::assert_contains_exactly_parameters(
            &self.info,
            self.actual,
            expected,
        ));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_chain() {
        let url = Url::parse("ftp://anakin@tatooine.org:2121/pod/race#finish").unwrap();
        assert_uri(&url)
            .has_scheme("ftp")
            .has_user_info("anakin")
            .has_host("tatooine.org")
            .has_port(2121)
            .has_authority("anakin@tatooine.org:2121")
            .has_path("/pod/race")
            .has_fragment("finish")
            .has_no_query()
            .has_no_parameters();
    }

    #[test]
    fn test_parameter_without_value() {
        let url = Url::parse("http://example.com/?debug&level=3").unwrap();
        assert_uri(&url)
            .has_parameter("debug")
            .has_parameter_value("debug", None)
            .has_no_parameter_value("level", "4")
            .contains_exactly_parameter_map(&ParameterMap::parse(Some("level=3&debug")));
    }

    #[test]
    #[should_panic(expected = "Expecting scheme of\n  <http://example.com/>\nto be:\n  <\"https\">\nbut was:\n  <\"http\">")]
    fn test_scheme_mismatch() {
        let url = Url::parse("http://example.com").unwrap();
        assert_uri(&url).has_scheme("https");
    }
}
