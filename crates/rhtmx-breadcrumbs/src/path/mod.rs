//! Path segmentation for breadcrumb trails
//!
//! All functions are **pure**: the sections of a pathname depend on the input
//! string only, never on external state.

pub mod sections;
pub use sections::{PathSection, PathSections};

/// Counts the non-empty segments of a pathname
///
/// This is the upper bound on the length of any trail computed for the path.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::segment_count;
///
/// assert_eq!(segment_count("/"), 0);
/// assert_eq!(segment_count("/users/42"), 2);
/// assert_eq!(segment_count("/users//42/"), 2);
/// ```
pub fn segment_count(pathname: &str) -> usize {
    pathname.split('/').filter(|s| !s.is_empty()).count()
}
