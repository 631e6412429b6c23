// File: src/config.rs
// Purpose: Route declarations loaded from breadcrumbs.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::route::{MatchOptions, MatchResult};
use crate::{Breadcrumbs, ConfigError, RouteDeclaration};

/// Breadcrumb configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreadcrumbsConfig {
    #[serde(default)]
    pub trail: TrailConfig,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Trail-wide options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailConfig {
    /// Whether a declared `/` route shows up as the first breadcrumb
    #[serde(default = "default_false")]
    pub include_root: bool,
}

/// One `[[routes]]` table
///
/// When several label fields are set, `hidden` wins over `template`, which
/// wins over `breadcrumb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern; left optional here so a missing path surfaces as
    /// [`ConfigError::MissingPath`] instead of a parse error
    #[serde(default)]
    pub path: Option<String>,

    /// Literal label
    #[serde(default)]
    pub breadcrumb: Option<String>,

    /// Label with `{param}` placeholders filled from the match
    #[serde(default)]
    pub template: Option<String>,

    /// Suppresses the breadcrumb for matching prefixes
    #[serde(default = "default_false")]
    pub hidden: bool,

    /// Custom match options
    #[serde(default, rename = "match")]
    pub match_options: Option<MatchOptions>,
}

fn default_false() -> bool {
    false
}

impl RouteConfig {
    /// Turns the table into a declaration with text labels
    pub fn to_declaration(&self) -> RouteDeclaration<String> {
        let route = RouteDeclaration::new(self.path.clone().unwrap_or_default());

        let route = if self.hidden {
            route.hidden()
        } else if let Some(template) = &self.template {
            let template = template.clone();
            route.render(move |matched, _| fill_template(&template, matched))
        } else if let Some(text) = &self.breadcrumb {
            route.breadcrumb(text.as_str())
        } else {
            route
        };

        match self.match_options {
            Some(options) => route.match_options(options),
            None => route,
        }
    }
}

impl FromStr for BreadcrumbsConfig {
    type Err = toml::de::Error;

    /// Parse configuration from a TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content)
    }
}

impl BreadcrumbsConfig {
    /// Load configuration from a file
    ///
    /// A missing or empty file yields the default configuration (no routes).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read breadcrumbs config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = content
            .parse::<Self>()
            .with_context(|| format!("Failed to parse breadcrumbs config: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./breadcrumbs.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("breadcrumbs.toml")
    }

    /// Declarations in file order
    pub fn declarations(&self) -> Vec<RouteDeclaration<String>> {
        self.routes.iter().map(RouteConfig::to_declaration).collect()
    }

    /// Builds a validated assembler
    pub fn into_breadcrumbs(self) -> Result<Breadcrumbs<String>, ConfigError> {
        Ok(Breadcrumbs::new(self.declarations())?.include_root(self.trail.include_root))
    }
}

/// Substitutes `{name}` placeholders with match parameters (pure function)
///
/// Unknown placeholders and unbalanced braces are kept as written.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::config::fill_template;
/// use rhtmx_breadcrumbs::route::{match_path, MatchOptions, RoutePattern};
///
/// let m = match_path("/users/42", &RoutePattern::parse("/users/:id"), MatchOptions::exact())
///     .unwrap()
///     .unwrap();
/// assert_eq!(fill_template("User {id} {other}", &m), "User 42 {other}");
/// ```
pub fn fill_template(template: &str, matched: &MatchResult) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match matched.param(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
