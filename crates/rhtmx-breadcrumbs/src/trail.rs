// File: src/trail.rs
// Purpose: Trail assembly: segment the pathname, resolve every section, keep the entries

use std::sync::Arc;

use maud::Markup;
use serde::Serialize;

use crate::component::WithBreadcrumbs;
use crate::declaration::{Content, RouteDeclaration};
use crate::humanize::{default_humanizer, humanize, Humanizer};
use crate::path::PathSections;
use crate::resolver::{Resolution, Resolver};
use crate::route::MatchResult;
use crate::{ConfigError, Location};

/// One entry of a trail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb<R = Markup> {
    /// Literal label, humanized default, or render function output
    pub content: Content<R>,
    /// Pattern of the declaration that produced the entry (the prefix itself for defaults)
    pub pattern: String,
    /// Match data, usable as a link target via `matched.url`
    pub matched: MatchResult,
}

/// Ordered breadcrumbs, root to leaf
pub type Trail<R = Markup> = Vec<Breadcrumb<R>>;

/// Configured trail assembler
///
/// Owns validated declarations, the injected humanizer and the root option.
/// It holds no other state: every call to [`Breadcrumbs::trail`] is
/// independent, so one instance can serve every location change.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{Breadcrumbs, Location, RouteDeclaration};
///
/// let breadcrumbs = Breadcrumbs::new(vec![
///     RouteDeclaration::<String>::new("/one").breadcrumb("one-breadcrumb"),
///     RouteDeclaration::new("/two"),
/// ])
/// .unwrap();
///
/// let trail = breadcrumbs.trail(&Location::new("/one/two")).unwrap();
/// let labels: Vec<_> = trail.iter().map(|b| b.content.as_text().unwrap()).collect();
/// assert_eq!(labels, vec!["one-breadcrumb", "Two"]);
/// ```
pub struct Breadcrumbs<R = Markup> {
    routes: Vec<RouteDeclaration<R>>,
    humanizer: Humanizer,
    include_root: bool,
}

impl<R> Breadcrumbs<R> {
    /// Validates the declarations and builds an assembler
    ///
    /// # Errors
    ///
    /// The first invalid declaration's [`ConfigError`].
    pub fn new(routes: Vec<RouteDeclaration<R>>) -> Result<Self, ConfigError> {
        validate(&routes)?;
        Ok(Self {
            routes,
            humanizer: default_humanizer(),
            include_root: false,
        })
    }

    /// Replaces the default humanizer
    pub fn with_humanizer<F>(mut self, humanizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.humanizer = Arc::new(humanizer);
        self
    }

    /// Lets a declared root route (`/`) contribute an entry for the root segment
    pub fn include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }

    pub fn routes(&self) -> &[RouteDeclaration<R>] {
        &self.routes
    }

    /// Computes the trail for a location
    pub fn trail(&self, location: &Location) -> Result<Trail<R>, ConfigError> {
        assemble(&self.routes, location, self.humanizer.as_ref(), self.include_root)
    }

    /// Wraps a component so it renders with this assembler's trail
    pub fn wrap<C, P, O>(self, component: C) -> WithBreadcrumbs<C, R>
    where
        C: Fn(crate::BreadcrumbProps<'_, P, R>) -> O,
    {
        WithBreadcrumbs::new(self, component)
    }
}

impl<R> Clone for Breadcrumbs<R> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            humanizer: Arc::clone(&self.humanizer),
            include_root: self.include_root,
        }
    }
}

impl<R> std::fmt::Debug for Breadcrumbs<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Breadcrumbs")
            .field("routes", &self.routes)
            .field("include_root", &self.include_root)
            .finish_non_exhaustive()
    }
}

/// Computes a trail with the default humanizer (pure function)
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{compute_trail, Location, RouteDeclaration};
///
/// let routes: Vec<RouteDeclaration<String>> = Vec::new();
/// let trail = compute_trail(&routes, &Location::new("/one/two")).unwrap();
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail[1].content.as_text(), Some("Two"));
/// ```
///
/// # Errors
///
/// [`ConfigError`] if any declaration is invalid, before any entry is built.
pub fn compute_trail<R>(
    routes: &[RouteDeclaration<R>],
    location: &Location,
) -> Result<Trail<R>, ConfigError> {
    validate(routes)?;
    assemble(routes, location, &humanize, false)
}

/// Computes a trail with an injected humanizer
pub fn compute_trail_with<R>(
    routes: &[RouteDeclaration<R>],
    location: &Location,
    humanizer: &dyn Fn(&str) -> String,
) -> Result<Trail<R>, ConfigError> {
    validate(routes)?;
    assemble(routes, location, humanizer, false)
}

fn validate<R>(routes: &[RouteDeclaration<R>]) -> Result<(), ConfigError> {
    routes.iter().try_for_each(RouteDeclaration::validate)
}

fn assemble<R>(
    routes: &[RouteDeclaration<R>],
    location: &Location,
    humanizer: &dyn Fn(&str) -> String,
    include_root: bool,
) -> Result<Trail<R>, ConfigError> {
    let resolver = Resolver::new(routes, humanizer).include_root(include_root);
    let mut trail = Vec::new();

    for (position, section) in PathSections::new(&location.pathname).enumerate() {
        // Empty segments after the first (`/a//b`, `/a/`) never stand for the root
        if position > 0 && section.is_root() {
            continue;
        }

        if let Resolution::Entry(breadcrumb) = resolver.resolve(&section, location)? {
            trail.push(breadcrumb);
        }
    }

    tracing::debug!("Computed {} breadcrumbs for {}", trail.len(), location.pathname);
    Ok(trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_happens_before_any_entry() {
        // The invalid declaration sits after one that would decide every prefix
        let routes: Vec<RouteDeclaration<String>> = vec![
            RouteDeclaration::new("/").match_options(Default::default()),
            RouteDeclaration::new(""),
        ];
        let err = compute_trail(&routes, &Location::new("/")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPath));
    }

    #[test]
    fn test_injected_humanizer() {
        let routes: Vec<RouteDeclaration<String>> = Vec::new();
        let trail =
            compute_trail_with(&routes, &Location::new("/a/b"), &|s: &str| s.to_uppercase()).unwrap();
        let labels: Vec<_> = trail.iter().filter_map(|b| b.content.as_text()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_builder_humanizer_and_root() {
        let breadcrumbs = Breadcrumbs::new(vec![RouteDeclaration::<String>::new("/").breadcrumb("Home")])
            .unwrap()
            .with_humanizer(|s| format!("<{s}>"))
            .include_root(true);

        let trail = breadcrumbs.trail(&Location::new("/x")).unwrap();
        let labels: Vec<_> = trail.iter().filter_map(|b| b.content.as_text()).collect();
        assert_eq!(labels, vec!["Home", "<x>"]);
    }

    #[test]
    fn test_root_contributes_once() {
        let breadcrumbs = Breadcrumbs::new(vec![RouteDeclaration::<String>::new("/").breadcrumb("Home")])
            .unwrap()
            .include_root(true);

        for pathname in ["/", "/a/", "/a//b"] {
            let trail = breadcrumbs.trail(&Location::new(pathname)).unwrap();
            let homes = trail.iter().filter(|b| b.content.as_text() == Some("Home")).count();
            assert_eq!(homes, 1, "{pathname}");
        }
    }

    #[test]
    fn test_clone_shares_configuration() {
        let breadcrumbs = Breadcrumbs::new(vec![RouteDeclaration::<String>::new("/a").breadcrumb("A")]).unwrap();
        let copy = breadcrumbs.clone();
        let location = Location::new("/a");
        assert_eq!(breadcrumbs.trail(&location).unwrap(), copy.trail(&location).unwrap());
    }
}
