// File: src/declaration.rs
// Purpose: Route declarations, their labels and the content placed in a breadcrumb

use std::sync::Arc;

use maud::Markup;
use serde::Serialize;

use crate::route::{match_path, matcher, MatchOptions, MatchResult, RoutePattern};
use crate::{ConfigError, Location};

/// Render function invoked with the match and the current location
pub type RenderFn<R = Markup> = Arc<dyn Fn(&MatchResult, &Location) -> R + Send + Sync>;

/// What a declaration says about its breadcrumb
///
/// Functional sum type replacing dynamic "string or function or null"
/// labels: the variant is inspected once, when the breadcrumb is built.
pub enum Label<R = Markup> {
    /// No label given; the humanized prefix is used
    Default,
    /// Explicitly no breadcrumb for matching prefixes
    Hidden,
    /// Literal text, passed through unchanged
    Text(String),
    /// Called with the match and location; its result becomes the content
    Render(RenderFn<R>),
}

impl<R> Default for Label<R> {
    fn default() -> Self {
        Self::Default
    }
}

impl<R> Clone for Label<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Hidden => Self::Hidden,
            Self::Text(text) => Self::Text(text.clone()),
            Self::Render(render) => Self::Render(Arc::clone(render)),
        }
    }
}

impl<R> std::fmt::Debug for Label<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Hidden => f.write_str("Hidden"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Render(_) => f.write_str("Render(<fn>)"),
        }
    }
}

/// Content of a built breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content<R = Markup> {
    Text(String),
    Rendered(R),
}

impl<R> Content<R> {
    /// Literal text, if this content came from a text label or the humanizer
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rendered(_) => None,
        }
    }

    /// Value returned by a render function
    pub fn rendered(&self) -> Option<&R> {
        match self {
            Self::Text(_) => None,
            Self::Rendered(value) => Some(value),
        }
    }
}

/// A route pattern with an optional breadcrumb label and match options
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{MatchOptions, RouteDeclaration};
///
/// let routes: Vec<RouteDeclaration<String>> = vec![
///     RouteDeclaration::new("/").breadcrumb("Home"),
///     RouteDeclaration::new("/users/:id").render(|m, _| format!("User {}", m.params["id"])),
///     RouteDeclaration::new("/admin").hidden(),
///     RouteDeclaration::new("/one/")
///         .breadcrumb("1")
///         .match_options(MatchOptions::default().with_strict(true)),
/// ];
/// assert_eq!(routes.len(), 4);
/// ```
pub struct RouteDeclaration<R = Markup> {
    /// Pattern in route syntax; must not be empty
    pub pattern: String,
    pub label: Label<R>,
    /// `None` means [`MatchOptions::exact`]
    pub match_options: Option<MatchOptions>,
}

impl<R> RouteDeclaration<R> {
    /// Creates a declaration with the default label
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: Label::Default,
            match_options: None,
        }
    }

    /// Sets a literal label
    pub fn breadcrumb(self, text: impl Into<String>) -> Self {
        self.label(Label::Text(text.into()))
    }

    /// Sets a render function label
    pub fn render<F>(self, render: F) -> Self
    where
        F: Fn(&MatchResult, &Location) -> R + Send + Sync + 'static,
    {
        self.label(Label::Render(Arc::new(render)))
    }

    /// Suppresses the breadcrumb for every prefix this route matches
    pub fn hidden(self) -> Self {
        self.label(Label::Hidden)
    }

    pub fn label(mut self, label: Label<R>) -> Self {
        self.label = label;
        self
    }

    /// Sets custom match options
    ///
    /// A declaration with custom options that fails to match a prefix
    /// suppresses that prefix's breadcrumb.
    pub fn match_options(mut self, options: MatchOptions) -> Self {
        self.match_options = Some(options);
        self
    }

    /// Options the matcher runs with
    pub fn effective_options(&self) -> MatchOptions {
        self.match_options.unwrap_or(MatchOptions::exact())
    }

    /// Checks that the pattern is present and compiles
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.is_empty() {
            return Err(ConfigError::MissingPath);
        }
        matcher::check(&RoutePattern::parse(self.pattern.as_str()), self.effective_options())
    }

    /// Matches a path prefix against this declaration (pure function)
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingPath`] when the pattern is empty,
    /// [`ConfigError::InvalidPattern`] when it does not compile.
    pub fn matches(&self, prefix: &str) -> Result<Option<MatchResult>, ConfigError> {
        if self.pattern.is_empty() {
            return Err(ConfigError::MissingPath);
        }
        match_path(
            prefix,
            &RoutePattern::parse(self.pattern.as_str()),
            self.effective_options(),
        )
    }
}

impl<R> Clone for RouteDeclaration<R> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            label: self.label.clone(),
            match_options: self.match_options,
        }
    }
}

impl<R> std::fmt::Debug for RouteDeclaration<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDeclaration")
            .field("pattern", &self.pattern)
            .field("label", &self.label)
            .field("match_options", &self.match_options)
            .finish()
    }
}
