// File: src/resolver.rs
// Purpose: Per-prefix breadcrumb resolution (first match wins, suppression, default labels)

use crate::declaration::{Content, Label, RouteDeclaration};
use crate::path::PathSection;
use crate::route::{match_path, MatchOptions, MatchResult, RoutePattern};
use crate::trail::Breadcrumb;
use crate::{ConfigError, Location};

/// Outcome of resolving one path section
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<R> {
    /// A breadcrumb for this section
    Entry(Breadcrumb<R>),
    /// A declaration explicitly hid this section
    Suppressed,
    /// Nothing to show (the root section without a contributing route)
    Skipped,
}

/// Result of the declaration scan, before default fallback
enum Decision<R> {
    Matched(Breadcrumb<R>),
    Suppressed,
    NoMatch,
}

/// Resolves path sections against an ordered list of declarations
///
/// Declaration order is matching precedence: the first declaration that
/// decides a prefix wins, and later (even more specific) declarations are
/// never consulted for it.
pub struct Resolver<'a, R> {
    routes: &'a [RouteDeclaration<R>],
    humanize: &'a (dyn Fn(&str) -> String + 'a),
    include_root: bool,
}

impl<'a, R> Resolver<'a, R> {
    pub fn new(routes: &'a [RouteDeclaration<R>], humanize: &'a (dyn Fn(&str) -> String + 'a)) -> Self {
        Self {
            routes,
            humanize,
            include_root: false,
        }
    }

    /// Lets a declared root route contribute a breadcrumb for the empty root segment
    pub fn include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }

    /// Resolves one section into an entry, a suppression or nothing
    ///
    /// # Algorithm
    ///
    /// 1. Scan declarations in order, stopping at the first decisive one
    /// 2. Non-empty segments without a decision get a default breadcrumb
    ///    labelled with the humanized raw segment
    /// 3. The root segment only yields an entry when `include_root` is set
    ///    and a declaration matched it
    pub fn resolve(
        &self,
        section: &PathSection<'_>,
        location: &Location,
    ) -> Result<Resolution<R>, ConfigError> {
        let decision = self.scan(&section.prefix, location)?;

        if section.is_root() {
            return Ok(match decision {
                Decision::Matched(breadcrumb) if self.include_root => Resolution::Entry(breadcrumb),
                Decision::Suppressed => Resolution::Suppressed,
                Decision::Matched(_) | Decision::NoMatch => Resolution::Skipped,
            });
        }

        Ok(match decision {
            Decision::Matched(breadcrumb) => Resolution::Entry(breadcrumb),
            Decision::Suppressed => Resolution::Suppressed,
            Decision::NoMatch => Resolution::Entry(self.default_breadcrumb(section)?),
        })
    }

    fn scan(&self, prefix: &str, location: &Location) -> Result<Decision<R>, ConfigError> {
        for route in self.routes {
            let matched = route.matches(prefix)?;

            // Custom options make a declaration own visibility for the prefix:
            // failing to match with them hides the breadcrumb
            let suppressed = match (&matched, &route.label) {
                (Some(_), Label::Hidden) => true,
                (None, _) => route.match_options.is_some(),
                _ => false,
            };
            if suppressed {
                tracing::trace!("Breadcrumb for {} suppressed by {}", prefix, route.pattern);
                return Ok(Decision::Suppressed);
            }

            let Some(matched) = matched else {
                continue;
            };

            let content = match &route.label {
                Label::Text(text) if !text.is_empty() => Content::Text(text.clone()),
                Label::Render(render) => Content::Rendered(render(&matched, location)),
                _ => Content::Text((self.humanize)(prefix)),
            };

            tracing::trace!("Breadcrumb for {} matched {}", prefix, route.pattern);
            return Ok(Decision::Matched(Breadcrumb {
                content,
                pattern: route.pattern.clone(),
                matched,
            }));
        }

        Ok(Decision::NoMatch)
    }

    fn default_breadcrumb(&self, section: &PathSection<'_>) -> Result<Breadcrumb<R>, ConfigError> {
        let prefix = section.prefix.as_str();
        let matched = match_path(prefix, &RoutePattern::literal(prefix), MatchOptions::exact())?
            .unwrap_or_else(|| MatchResult {
                pattern: prefix.to_string(),
                url: prefix.to_string(),
                is_exact: true,
                params: Default::default(),
            });

        tracing::trace!("Default breadcrumb for {}", prefix);
        Ok(Breadcrumb {
            content: Content::Text((self.humanize)(section.segment)),
            pattern: prefix.to_string(),
            matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize;
    use crate::path::PathSections;

    fn section(prefix: &str, segment: &'static str) -> PathSection<'static> {
        PathSection {
            prefix: prefix.to_string(),
            segment,
        }
    }

    fn resolve(
        routes: &[RouteDeclaration<String>],
        section: &PathSection<'_>,
    ) -> Resolution<String> {
        Resolver::new(routes, &humanize)
            .resolve(section, &Location::new(section.prefix.clone()))
            .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let routes = vec![
            RouteDeclaration::new("/users/:id").breadcrumb("Any user"),
            RouteDeclaration::new("/users/me").breadcrumb("Me"),
        ];

        match resolve(&routes, &section("/users/me", "me")) {
            Resolution::Entry(b) => {
                assert_eq!(b.content.as_text(), Some("Any user"));
                assert_eq!(b.pattern, "/users/:id");
            }
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_match_suppresses() {
        let routes = vec![
            RouteDeclaration::new("/one").hidden(),
            RouteDeclaration::new("/one").breadcrumb("never"),
        ];
        assert_eq!(resolve(&routes, &section("/one", "one")), Resolution::Suppressed);
    }

    #[test]
    fn test_hidden_without_match_is_not_decisive() {
        let routes = vec![RouteDeclaration::new("/other").hidden()];
        match resolve(&routes, &section("/one", "one")) {
            Resolution::Entry(b) => assert_eq!(b.content.as_text(), Some("One")),
            other => panic!("expected default entry, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_custom_match_suppresses() {
        let routes = vec![
            RouteDeclaration::new("/elsewhere").match_options(MatchOptions::exact()),
            RouteDeclaration::new("/one").breadcrumb("never"),
        ];
        assert_eq!(resolve(&routes, &section("/one", "one")), Resolution::Suppressed);
    }

    #[test]
    fn test_matched_without_label_humanizes_prefix() {
        let routes = vec![RouteDeclaration::new("/order-history")];
        match resolve(&routes, &section("/order-history", "order-history")) {
            Resolution::Entry(b) => assert_eq!(b.content.as_text(), Some("Order History")),
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_default_breadcrumb_match_data() {
        let routes: Vec<RouteDeclaration<String>> = Vec::new();
        match resolve(&routes, &section("/a/:b", ":b")) {
            Resolution::Entry(b) => {
                assert_eq!(b.pattern, "/a/:b");
                assert_eq!(b.matched.url, "/a/:b");
                assert!(b.matched.is_exact);
                assert!(b.matched.params.is_empty());
            }
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_root_skipped_unless_included() {
        let routes = vec![RouteDeclaration::new("/").breadcrumb("Home")];
        let root = PathSections::new("/x").next().unwrap();

        assert_eq!(resolve(&routes, &root), Resolution::Skipped);

        let included = Resolver::new(&routes, &humanize)
            .include_root(true)
            .resolve(&root, &Location::new("/x"))
            .unwrap();
        assert!(matches!(included, Resolution::Entry(b) if b.content.as_text() == Some("Home")));
    }

    #[test]
    fn test_undeclared_root_never_contributes() {
        let routes: Vec<RouteDeclaration<String>> = Vec::new();
        let root = section("/", "");
        let resolution = Resolver::new(&routes, &humanize)
            .include_root(true)
            .resolve(&root, &Location::new("/"))
            .unwrap();
        assert_eq!(resolution, Resolution::Skipped);
    }

    #[test]
    fn test_render_fn_sees_match_and_location() {
        let routes = vec![RouteDeclaration::new("/1/2/:n")
            .render(|m: &MatchResult, loc: &Location| format!("{}@{}", m.params["n"], loc.pathname))];

        let resolution = Resolver::new(&routes, &humanize)
            .resolve(&section("/1/2/3", "3"), &Location::new("/1/2/3"))
            .unwrap();
        match resolution {
            Resolution::Entry(b) => assert_eq!(b.content.rendered().map(String::as_str), Some("3@/1/2/3")),
            other => panic!("expected entry, got {other:?}"),
        }
    }
}
