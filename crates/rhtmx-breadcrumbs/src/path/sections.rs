/// Lazy iterator over the cumulative sections of a pathname
///
/// For path `/a/b/c`, yields: `/` (root) → `/a` → `/a/b` → `/a/b/c`
///
/// Each item pairs the cumulative prefix with the raw segment that produced
/// it. The leading empty segment of an absolute path is kept and maps to the
/// root prefix `/`, so callers can tell the synthetic root apart from real
/// segments by checking [`PathSection::is_root`].
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::PathSections;
///
/// let prefixes: Vec<String> = PathSections::new("/1/2/3").map(|s| s.prefix).collect();
/// assert_eq!(prefixes, vec!["/", "/1", "/1/2", "/1/2/3"]);
/// ```
///
/// # Behaviour on irregular input
///
/// No normalization happens here:
/// - An empty interior segment (`/a//b`) maps to `/` and restarts the prefix,
///   so the next section is `/b`
/// - A trailing slash (`/a/`) yields a final empty segment mapped to `/`
/// - A relative path (`a/b`) is anchored at the root: `/a`, `/a/b`
#[derive(Debug, Clone)]
pub struct PathSections<'a> {
    segments: std::str::Split<'a, char>,
    previous: String,
}

/// One step of the segmentation: a cumulative prefix and its raw segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSection<'a> {
    /// Cumulative, root-anchored prefix (`/`, `/a`, `/a/b`, ...)
    pub prefix: String,
    /// Raw segment text as it appeared in the pathname (empty for the root)
    pub segment: &'a str,
}

impl<'a> PathSection<'a> {
    /// True for the synthetic root section produced by an empty segment
    pub fn is_root(&self) -> bool {
        self.segment.is_empty()
    }
}

impl<'a> PathSections<'a> {
    /// Creates a new section iterator over the given pathname
    ///
    /// The iterator is [`Clone`], so a sequence can be restarted from any
    /// point without re-reading the pathname.
    pub fn new(pathname: &'a str) -> Self {
        Self {
            segments: pathname.split('/'),
            previous: String::new(),
        }
    }
}

impl<'a> Iterator for PathSections<'a> {
    type Item = PathSection<'a>;

    /// Folds the next raw segment into the running prefix
    ///
    /// Right after the root the running prefix collapses to an empty string so
    /// the next concatenation does not produce `//`.
    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.next()?;

        let prefix = if segment.is_empty() {
            "/".to_string()
        } else {
            format!("{}/{}", self.previous, segment)
        };

        self.previous = if prefix == "/" {
            String::new()
        } else {
            prefix.clone()
        };

        Some(PathSection { prefix, segment })
    }
}

impl std::iter::FusedIterator for PathSections<'_> {}
