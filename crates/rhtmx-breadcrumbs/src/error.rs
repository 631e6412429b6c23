// File: src/error.rs
// Purpose: Configuration errors raised while building a breadcrumb trail

use thiserror::Error;

/// Errors caused by an invalid set of route declarations
///
/// Both variants abort the whole computation: no partial trail is ever
/// returned alongside a `ConfigError`. Everything else that can happen while
/// resolving a path (no matching route, suppressed breadcrumbs, empty
/// segments) is ordinary control flow, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A declaration was given without a path pattern (or with an empty one)
    #[error("path must be provided in every route declaration")]
    MissingPath,

    /// The pattern could not be compiled into a matcher
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Returns the pattern involved in the error, if there is one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::MissingPath => None,
            Self::InvalidPattern { pattern, .. } => Some(pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_message() {
        let err = ConfigError::MissingPath;
        assert_eq!(
            err.to_string(),
            "path must be provided in every route declaration"
        );
        assert_eq!(err.pattern(), None);
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = ConfigError::InvalidPattern {
            pattern: "/:id([)".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid route pattern `/:id([)`"));
        assert_eq!(err.pattern(), Some("/:id([)"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
