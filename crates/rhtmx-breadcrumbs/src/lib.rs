//! # RHTMX Breadcrumbs
//!
//! Breadcrumb trails computed from the current location and an ordered list
//! of route declarations:
//! - Cumulative path prefixes (`/users`, `/users/42`, ...)
//! - Declarative patterns (`/users/:id`, `/files/:path*`, `/posts/:id?`)
//! - Literal labels, render functions and explicit suppression
//! - Humanized default labels for undeclared segments
//!
//! ## Matching Rules
//!
//! - Declaration order is precedence: the first declaration that decides a
//!   prefix wins, nothing is sorted by specificity
//! - Declarations without options match exactly
//! - A declaration with custom options hides every prefix it fails to match
//! - The root segment is skipped unless [`Breadcrumbs::include_root`] is set
//!
//! Declarations are validated before any prefix is resolved, so an invalid
//! list never yields a partial trail.
//!
//! ## Example
//!
//! ```
//! use rhtmx_breadcrumbs::{compute_trail, Location, RouteDeclaration};
//!
//! let routes = vec![
//!     RouteDeclaration::<String>::new("/users").breadcrumb("People"),
//!     RouteDeclaration::new("/users/:id").render(|m, _| format!("User {}", m.params["id"])),
//! ];
//!
//! let trail = compute_trail(&routes, &Location::new("/users/42")).unwrap();
//! assert_eq!(trail.len(), 2);
//! assert_eq!(trail[0].content.as_text(), Some("People"));
//! assert_eq!(trail[1].content.rendered().map(String::as_str), Some("User 42"));
//! assert_eq!(trail[1].matched.url, "/users/42");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod component;
pub mod config;
mod declaration;
mod error;
mod history;
mod humanize;
pub mod path;
pub mod render;
mod resolver;
pub mod route;
mod trail;

// ============================================================================
// Public API
// ============================================================================

pub use component::{with_breadcrumbs, BreadcrumbProps, WithBreadcrumbs};
pub use config::{BreadcrumbsConfig, RouteConfig, TrailConfig};
pub use declaration::{Content, Label, RenderFn, RouteDeclaration};
pub use error::ConfigError;
pub use history::{Action, ListenerId, Location, MemoryHistory, RoutingContext};
pub use humanize::{default_humanizer, humanize, Humanizer};
pub use resolver::{Resolution, Resolver};
pub use route::{match_path, MatchOptions, MatchResult, RoutePattern};
pub use trail::{compute_trail, compute_trail_with, Breadcrumb, Breadcrumbs, Trail};
