//! HTML rendering of a trail
//!
//! Render-only helper: the trail decides what to show, this module only turns
//! it into markup.

use maud::{html, Markup, Render};

use crate::declaration::Content;
use crate::trail::Breadcrumb;

impl<R: Render> Render for Content<R> {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Self::Text(text) => text.render_to(buffer),
            Self::Rendered(value) => value.render_to(buffer),
        }
    }
}

/// Renders breadcrumb navigation
///
/// Every entry links to its matched url; the last one is the current page
/// and is rendered without a link. An empty trail renders an empty `nav`.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{compute_trail, render::breadcrumb_nav, Location, RouteDeclaration};
///
/// let routes = vec![RouteDeclaration::<String>::new("/docs").breadcrumb("Docs")];
/// let trail = compute_trail(&routes, &Location::new("/docs/intro")).unwrap();
/// let html = breadcrumb_nav(&trail).into_string();
///
/// assert!(html.contains(r#"<a href="/docs" class="breadcrumb-link">Docs</a>"#));
/// assert!(html.contains(r#"<span class="breadcrumb-current" aria-current="page">Intro</span>"#));
/// ```
pub fn breadcrumb_nav<R: Render>(trail: &[Breadcrumb<R>]) -> Markup {
    html! {
        nav class="breadcrumb" aria-label="Breadcrumb" {
            @for (i, crumb) in trail.iter().enumerate() {
                @if i > 0 {
                    span class="breadcrumb-separator" { "/" }
                }
                @if i + 1 == trail.len() {
                    span class="breadcrumb-current" aria-current="page" { (crumb.content) }
                } @else {
                    a href=(crumb.matched.url) class="breadcrumb-link" { (crumb.content) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_trail, Location, RouteDeclaration};
    use maud::PreEscaped;

    #[test]
    fn test_text_is_escaped() {
        let routes = vec![RouteDeclaration::<String>::new("/a").breadcrumb("<b>")];
        let trail = compute_trail(&routes, &Location::new("/a")).unwrap();
        let html = breadcrumb_nav(&trail).into_string();
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let routes = vec![RouteDeclaration::new("/a").render(|_, _| html! { em { "A" } })];
        let trail = compute_trail(&routes, &Location::new("/a")).unwrap();
        let html = breadcrumb_nav(&trail).into_string();
        assert!(html.contains("<em>A</em>"));
    }

    #[test]
    fn test_separators_between_entries() {
        let routes: Vec<RouteDeclaration<PreEscaped<String>>> = Vec::new();
        let trail = compute_trail(&routes, &Location::new("/a/b/c")).unwrap();
        let html = breadcrumb_nav(&trail).into_string();
        assert_eq!(html.matches("breadcrumb-separator").count(), 2);
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn test_empty_trail() {
        let trail: Vec<Breadcrumb<String>> = Vec::new();
        assert_eq!(
            breadcrumb_nav(&trail).into_string(),
            r#"<nav class="breadcrumb" aria-label="Breadcrumb"></nav>"#
        );
    }
}
