use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_breadcrumbs::{render, Content, Location, Trail};
use std::path::Path;

use super::load_config;
use crate::OutputFormat;

pub fn execute(pathname: &str, routes: &Path, format: OutputFormat, include_root: bool) -> Result<()> {
    let trail = compute(pathname, routes, include_root)?;

    println!("{}", format_trail(&trail, format)?);
    Ok(())
}

/// Loads the routes file and computes the trail for `pathname`
///
/// The root breadcrumb is included when either the flag or
/// `[trail] include_root` asks for it.
pub fn compute(pathname: &str, routes: &Path, include_root: bool) -> Result<Trail<String>> {
    let config = load_config(routes)?;
    let include_root = include_root || config.trail.include_root;
    tracing::debug!("Loaded {} route declarations from {:?}", config.routes.len(), routes);

    let breadcrumbs = config
        .into_breadcrumbs()
        .context("Invalid route declarations")?
        .include_root(include_root);

    let location = Location::parse(pathname);
    Ok(breadcrumbs.trail(&location)?)
}

/// Renders a trail in the requested output format
pub fn format_trail(trail: &Trail<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(trail)?),
        OutputFormat::Html => Ok(render::breadcrumb_nav(trail).into_string()),
        OutputFormat::Text => {
            if trail.is_empty() {
                return Ok(format!("{}", "(no breadcrumbs)".dimmed()));
            }

            let lines: Vec<String> = trail
                .iter()
                .enumerate()
                .map(|(i, crumb)| {
                    format!(
                        "{}. {}  {}",
                        i + 1,
                        label(&crumb.content).bold(),
                        crumb.matched.url.cyan()
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn label(content: &Content<String>) -> &str {
    match content {
        Content::Text(text) => text.as_str(),
        Content::Rendered(value) => value.as_str(),
    }
}
