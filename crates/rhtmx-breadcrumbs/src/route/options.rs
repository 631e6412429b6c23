use serde::{Deserialize, Serialize};

/// Match configuration for route patterns
///
/// Flags mirror the classic declarative-router options:
///
/// - `exact`: the pattern must consume the whole path, not just a prefix of it
/// - `strict`: trailing slashes are significant
/// - `sensitive`: matching is case-sensitive
///
/// Every flag is `false` in [`MatchOptions::default`]. A declaration that
/// supplies no options at all is matched with [`MatchOptions::exact`] instead,
/// so supplying options replaces the defaults wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub exact: bool,
    pub strict: bool,
    pub sensitive: bool,
}

impl MatchOptions {
    /// Options used for declarations that do not carry their own
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_breadcrumbs::MatchOptions;
    ///
    /// let opts = MatchOptions::exact();
    /// assert!(opts.exact);
    /// assert!(!opts.strict);
    /// assert!(!opts.sensitive);
    /// ```
    pub const fn exact() -> Self {
        Self {
            exact: true,
            strict: false,
            sensitive: false,
        }
    }

    /// Sets whether the pattern must match the whole path
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Sets whether trailing slashes are significant
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets whether matching is case-sensitive
    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let opts = MatchOptions::default();
        assert!(!opts.exact && !opts.strict && !opts.sensitive);
    }

    #[test]
    fn test_builder_chain() {
        let opts = MatchOptions::default().with_strict(true).with_sensitive(true);
        assert_eq!(
            opts,
            MatchOptions {
                exact: false,
                strict: true,
                sensitive: true
            }
        );
    }

    #[test]
    fn test_deserialize_partial_table() {
        let opts: MatchOptions = toml::from_str("strict = true").unwrap();
        assert_eq!(opts, MatchOptions::default().with_strict(true));
    }
}
