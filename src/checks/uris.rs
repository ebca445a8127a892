//! Checks on URLs.
//!
//! Components follow [`url::Url`] semantics: the port of a URL using its
//! scheme's default port is absent, and the path of a URL with a hierarchy
//! is never empty (`http://host` has path `/`).

use url::{Position, Url};

use crate::config::AssertionInfo;
use crate::diff::parameters::{self, ParameterMap};
use crate::error::Result;

fn component_mismatch<T: std::fmt::Debug>(
    info: &AssertionInfo,
    component: &str,
    actual: &Url,
    expected: &T,
    was: &T,
) -> crate::error::Error {
    info.failure(format!(
        "Expecting {component} of\n  <{actual}>\nto be:\n  <{expected:?}>\nbut was:\n  <{was:?}>"
    ))
}

fn check_component<T: PartialEq + std::fmt::Debug>(
    info: &AssertionInfo,
    component: &str,
    actual: &Url,
    expected: T,
    was: T,
) -> Result<()> {
    if expected == was {
        return Ok(());
    }
    Err(component_mismatch(info, component, actual, &expected, &was))
}

/// The scheme of `actual` is `expected`.
pub fn assert_has_scheme(info: &AssertionInfo, actual: &Url, expected: &str) -> Result<()> {
    check_component(info, "scheme", actual, expected, actual.scheme())
}

/// The path of `actual` is `expected`.
pub fn assert_has_path(info: &AssertionInfo, actual: &Url, expected: &str) -> Result<()> {
    check_component(info, "path", actual, expected, actual.path())
}

/// The explicit port of `actual` is `expected`; `None` means no port.
pub fn assert_has_port(info: &AssertionInfo, actual: &Url, expected: Option<u16>) -> Result<()> {
    check_component(info, "port", actual, expected, actual.port())
}

/// The host of `actual` is `expected`.
pub fn assert_has_host(info: &AssertionInfo, actual: &Url, expected: Option<&str>) -> Result<()> {
    check_component(info, "host", actual, expected, actual.host_str())
}

/// The authority of `actual` (`user:password@host:port`) is `expected`.
pub fn assert_has_authority(info: &AssertionInfo, actual: &Url, expected: Option<&str>) -> Result<()> {
    check_component(info, "authority", actual, expected, authority(actual))
}

/// The user info of `actual` is `expected`; `None` means no user info.
pub fn assert_has_user_info(info: &AssertionInfo, actual: &Url, expected: Option<&str>) -> Result<()> {
    let user_info = user_info(actual);
    check_component(info, "user info", actual, expected, user_info.as_deref())
}

/// The fragment of `actual` is `expected`; `None` means no fragment.
pub fn assert_has_fragment(info: &AssertionInfo, actual: &Url, expected: Option<&str>) -> Result<()> {
    check_component(info, "fragment", actual, expected, actual.fragment())
}

/// The raw query of `actual` is `expected`; `None` means no query.
pub fn assert_has_query(info: &AssertionInfo, actual: &Url, expected: Option<&str>) -> Result<()> {
    check_component(info, "query", actual, expected, actual.query())
}

/// Text between the scheme separator and the path, if there is any.
pub fn authority(url: &Url) -> Option<&str> {
    if !url.has_authority() {
        return None;
    }
    let authority = &url[Position::BeforeUsername..Position::AfterPort];
    if authority.is_empty() {
        None
    } else {
        Some(authority)
    }
}

/// `user` or `user:password`, if the URL carries credentials.
pub fn user_info(url: &Url) -> Option<String> {
    match (url.username(), url.password()) {
        ("", None) => None,
        (user, None) => Some(user.to_string()),
        (user, Some(password)) => Some(format!("{user}:{password}")),
    }
}

// =============================================================================
// Parameters
// =============================================================================

fn parameters_of(actual: &Url) -> ParameterMap {
    ParameterMap::parse(actual.query())
}

fn value_description(values: &[Option<String>]) -> String {
    match values {
        [single] => single.clone().unwrap_or_default(),
        _ => parameters::describe_values(values),
    }
}

fn has_no_value(values: &[Option<String>]) -> bool {
    matches!(values, [None])
}

/// `actual` has a parameter named `name`, with or without value.
pub fn assert_has_parameter(info: &AssertionInfo, actual: &Url, name: &str) -> Result<()> {
    if parameters_of(actual).contains(name) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nbut was missing"
    )))
}

/// `actual` has a parameter named `name` holding `value`; a `None` value
/// stands for a parameter given without `=`.
pub fn assert_has_parameter_with_value(
    info: &AssertionInfo,
    actual: &Url,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    let parameters = parameters_of(actual);
    let Some(values) = parameters.values(name) else {
        return Err(info.failure(match value {
            None => format!(
                "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nwith no value, but parameter was missing"
            ),
            Some(value) => format!(
                "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nwith value:\n  <{value}>\nbut parameter was missing"
            ),
        }));
    };
    if values.iter().any(|v| v.as_deref() == value) {
        return Ok(());
    }
    let plural = values.len() > 1;
    let message = match value {
        None => format!(
            "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nwith no value, but parameter had {}:\n  <{}>",
            if plural { "values" } else { "value" },
            value_description(values)
        ),
        Some(value) if has_no_value(values) => format!(
            "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nwith value:\n  <{value}>\nbut parameter had no value"
        ),
        Some(value) => format!(
            "Expecting actual:\n  <{actual}>\nto have parameter:\n  <{name}>\nwith value:\n  <{value}>\nbut had {}:\n  <{}>",
            if plural { "values" } else { "value" },
            value_description(values)
        ),
    };
    Err(info.failure(message))
}

/// `actual` has no parameter named `name`.
pub fn assert_has_no_parameter(info: &AssertionInfo, actual: &Url, name: &str) -> Result<()> {
    let parameters = parameters_of(actual);
    let Some(values) = parameters.values(name) else {
        return Ok(());
    };
    let message = if has_no_value(values) {
        format!(
            "Expecting actual:\n  <{actual}>\nnot to have parameter:\n  <{name}>\nbut parameter was present with no value"
        )
    } else {
        format!(
            "Expecting actual:\n  <{actual}>\nnot to have parameter:\n  <{name}>\nbut parameter was present with {}:\n  <{}>",
            if values.len() > 1 { "values" } else { "value" },
            value_description(values)
        )
    };
    Err(info.failure(message))
}

/// `actual` has no parameter named `name` holding `value`.
pub fn assert_has_no_parameter_with_value(
    info: &AssertionInfo,
    actual: &Url,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    let parameters = parameters_of(actual);
    let Some(values) = parameters.values(name) else {
        return Ok(());
    };
    if !values.iter().any(|v| v.as_deref() == value) {
        return Ok(());
    }
    Err(info.failure(match value {
        None => format!(
            "Expecting actual:\n  <{actual}>\nnot to have parameter:\n  <{name}>\nwith no value, but did"
        ),
        Some(value) => format!(
            "Expecting actual:\n  <{actual}>\nnot to have parameter:\n  <{name}>\nwith value:\n  <{value}>\nbut did"
        ),
    }))
}

/// `actual` has no query parameters at all.
pub fn assert_has_no_parameters(info: &AssertionInfo, actual: &Url) -> Result<()> {
    let parameters = parameters_of(actual);
    if parameters.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = parameters.names().collect();
    let description = match names.as_slice() {
        [single] => (*single).to_string(),
        _ => format!("[{}]", names.join(", ")),
    };
    Err(info.failure(format!(
        "Expecting actual:\n  <{actual}>\nnot to have any parameters but found:\n  <{description}>"
    )))
}

/// The parameters of `actual` are exactly `expected`, regardless of order.
///
/// Values cancel out by value: `a=1&a=1` and `a=1` hold the same parameters.
pub fn assert_contains_exactly_parameters(
    info: &AssertionInfo,
    actual: &Url,
    expected: &ParameterMap,
) -> Result<()> {
    let parameters = parameters_of(actual);
    let differences = parameters::reconcile(&parameters, expected);
    if differences.is_empty() {
        return Ok(());
    }
    let mut message = format!("Expecting parameters:\n{expected}\nbut had:\n{parameters}");
    if !differences.unexpected.is_empty() {
        message.push_str(&format!("\nnot expected:\n{}", differences.unexpected));
    }
    if !differences.missing.is_empty() {
        message.push_str(&format!("\nmissing:\n{}", differences.missing));
    }
    Err(info.failure(message))
}

/// Entry-list form of [`assert_contains_exactly_parameters`].
pub fn assert_contains_exactly_parameter_entries(
    info: &AssertionInfo,
    actual: &Url,
    expected: &[(&str, Option<&str>)],
) -> Result<()> {
    let expected = ParameterMap::from_entries(expected.iter().copied());
    assert_contains_exactly_parameters(info, actual, &expected)
}
