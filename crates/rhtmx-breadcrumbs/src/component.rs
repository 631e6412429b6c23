// File: src/component.rs
// Purpose: Component wrapper that injects the current trail next to the original props

use maud::Markup;

use crate::history::{ListenerId, MemoryHistory, RoutingContext};
use crate::trail::{Breadcrumbs, Trail};
use crate::{ConfigError, Location, RouteDeclaration};

/// Props handed to a wrapped component
///
/// `props` are the caller's props, untouched; `breadcrumbs` is the trail for
/// `location`.
#[derive(Debug)]
pub struct BreadcrumbProps<'a, P, R = Markup> {
    pub props: &'a P,
    pub location: &'a Location,
    pub breadcrumbs: Trail<R>,
}

/// Validates declarations and returns an assembler ready to wrap components
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{with_breadcrumbs, BreadcrumbProps, Location, RouteDeclaration};
///
/// struct Props {
///     title: &'static str,
/// }
///
/// let page = with_breadcrumbs(vec![RouteDeclaration::<String>::new("/").breadcrumb("Home")])
///     .unwrap()
///     .wrap(|p: BreadcrumbProps<'_, Props, String>| {
///         format!("{} ({} crumbs)", p.props.title, p.breadcrumbs.len())
///     });
///
/// let out = page
///     .render(&Location::new("/users/42"), &Props { title: "User" })
///     .unwrap();
/// assert_eq!(out, "User (2 crumbs)");
/// ```
pub fn with_breadcrumbs<R>(routes: Vec<RouteDeclaration<R>>) -> Result<Breadcrumbs<R>, ConfigError> {
    Breadcrumbs::new(routes)
}

/// A component enhanced with breadcrumbs
pub struct WithBreadcrumbs<C, R = Markup> {
    breadcrumbs: Breadcrumbs<R>,
    component: C,
}

impl<C, R> WithBreadcrumbs<C, R> {
    pub(crate) fn new(breadcrumbs: Breadcrumbs<R>, component: C) -> Self {
        Self {
            breadcrumbs,
            component,
        }
    }

    pub fn breadcrumbs(&self) -> &Breadcrumbs<R> {
        &self.breadcrumbs
    }

    /// Renders the wrapped component for the context's current location
    pub fn render<P, O>(&self, context: &impl RoutingContext, props: &P) -> Result<O, ConfigError>
    where
        C: Fn(BreadcrumbProps<'_, P, R>) -> O,
    {
        let location = context.location();
        let breadcrumbs = self.breadcrumbs.trail(location)?;

        Ok((self.component)(BreadcrumbProps {
            props,
            location,
            breadcrumbs,
        }))
    }

    /// Renders now and again after every change of `history`
    ///
    /// Each render result goes to `sink`. The returned id unsubscribes the
    /// component via [`MemoryHistory::unlisten`].
    pub fn connect<P, O, S>(self, history: &mut MemoryHistory, props: P, mut sink: S) -> ListenerId
    where
        C: Fn(BreadcrumbProps<'_, P, R>) -> O + 'static,
        P: 'static,
        R: 'static,
        S: FnMut(Result<O, ConfigError>) + 'static,
    {
        sink(self.render(&*history, &props));

        history.listen(move |location, _| sink(self.render(location, &props)))
    }
}

impl<C, R> std::fmt::Debug for WithBreadcrumbs<C, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithBreadcrumbs")
            .field("breadcrumbs", &self.breadcrumbs)
            .finish_non_exhaustive()
    }
}
