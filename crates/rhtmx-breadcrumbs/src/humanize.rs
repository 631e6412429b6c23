// File: src/humanize.rs
// Purpose: Default label humanizer for breadcrumbs without a declared label

use std::sync::Arc;

use heck::ToTitleCase;

/// Injected function turning a raw segment or prefix into a label
pub type Humanizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Returns the default humanizer as a shareable handle
pub fn default_humanizer() -> Humanizer {
    Arc::new(humanize)
}

/// Converts an identifier-like string into a title-cased label (pure function)
///
/// - camelCase boundaries start a new word
/// - any non-alphanumeric character (`-`, `_`, `/`, `.`, whitespace) separates
///   words; runs collapse
/// - each word is capitalized, the rest of the word lowercased
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::humanize;
///
/// assert_eq!(humanize("user-profile"), "User Profile");
/// assert_eq!(humanize("userProfile"), "User Profile");
/// assert_eq!(humanize("/two"), "Two");
/// assert_eq!(humanize("42"), "42");
/// ```
pub fn humanize(input: &str) -> String {
    input.to_title_case()
}
