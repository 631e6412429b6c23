//! Route matching: pattern against a literal path prefix
//!
//! Patterns are compiled into an anchored regex per call. Nothing is cached
//! between calls, so matching stays a pure function of its inputs.
use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

use super::options::MatchOptions;
use super::pattern::{PatternToken, RoutePattern};
use crate::ConfigError;

/// Result of matching a pattern against a path
///
/// `url` is the portion of the path the pattern consumed and `is_exact`
/// tells whether that portion is the entire path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Pattern that produced the match
    pub pattern: String,
    /// Matched portion of the path
    pub url: String,
    pub is_exact: bool,
    /// Extracted parameters (optional parameters that did not match are absent)
    pub params: HashMap<String, String>,
}

impl MatchResult {
    /// Looks up a parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Matches `path` against `pattern` under `options` (pure function)
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::route::{match_path, MatchOptions, RoutePattern};
///
/// let pattern = RoutePattern::parse("/users/:id");
/// let m = match_path("/users/42", &pattern, MatchOptions::exact()).unwrap().unwrap();
/// assert_eq!(m.param("id"), Some("42"));
/// assert!(m.is_exact);
///
/// // Without `exact` the pattern may match a leading part of the path
/// let m = match_path("/users/42/posts", &pattern, MatchOptions::default()).unwrap().unwrap();
/// assert_eq!(m.url, "/users/42");
/// assert!(!m.is_exact);
/// ```
///
/// # Errors
///
/// [`ConfigError::InvalidPattern`] when a custom parameter regex does not compile.
pub fn match_path(
    path: &str,
    pattern: &RoutePattern,
    options: MatchOptions,
) -> Result<Option<MatchResult>, ConfigError> {
    let regex = compile(pattern, options)?;

    let Some(captures) = regex.captures(path) else {
        return Ok(None);
    };

    let url = captures.get(1).map_or("", |m| m.as_str());
    let is_exact = path == url;
    if options.exact && !is_exact {
        return Ok(None);
    }

    // Group 1 is the matched url, parameters follow in declaration order
    let params = pattern
        .param_names()
        .enumerate()
        .filter_map(|(i, name)| {
            captures
                .get(i + 2)
                .map(|value| (name.to_string(), value.as_str().to_string()))
        })
        .collect();

    let url = if pattern.source() == "/" && url.is_empty() {
        "/".to_string()
    } else {
        url.to_string()
    };

    Ok(Some(MatchResult {
        pattern: pattern.source().to_string(),
        url,
        is_exact,
        params,
    }))
}

/// Compiles a pattern without matching anything
pub(crate) fn check(pattern: &RoutePattern, options: MatchOptions) -> Result<(), ConfigError> {
    compile(pattern, options).map(|_| ())
}

/// Builds the anchored regex for a pattern
///
/// The shape follows the classic path-to-regexp construction. Lookaheads
/// are not available in `regex`, so the segment boundary after a non-exact
/// match is consumed outside the url group instead of asserted.
fn compile(pattern: &RoutePattern, options: MatchOptions) -> Result<Regex, ConfigError> {
    let mut route = String::new();

    for token in pattern.tokens() {
        match token {
            PatternToken::Static(text) => route.push_str(&regex::escape(text)),
            PatternToken::Param(param) => {
                let prefix = param
                    .prefix
                    .map(|c| regex::escape(&c.to_string()))
                    .unwrap_or_default();

                let mut capture = format!("(?:{})", param.pattern);
                if param.kind.is_repeat() {
                    capture = format!("{capture}(?:{prefix}{capture})*");
                }

                let group = if !param.kind.is_optional() {
                    format!("{prefix}({capture})")
                } else if param.partial {
                    format!("{prefix}({capture})?")
                } else {
                    format!("(?:{prefix}({capture}))?")
                };
                route.push_str(&group);
            }
        }
    }

    let ends_with_delimiter = route.ends_with('/');
    if !options.strict {
        if ends_with_delimiter {
            route.pop();
        }
        route.push_str("(?:/$)?");
    }

    let terminator = if options.exact {
        "$"
    } else if options.strict && ends_with_delimiter {
        ""
    } else {
        "(?:/|$)"
    };

    let flags = if options.sensitive { "" } else { "(?i)" };
    let source = format!("{flags}^({route}){terminator}");

    Regex::new(&source).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.source().to_string(),
        source,
    })
}
