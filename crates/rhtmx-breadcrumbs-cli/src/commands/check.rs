use anyhow::Result;
use colored::Colorize;
use rhtmx_breadcrumbs::{BreadcrumbsConfig, ConfigError, RouteConfig};
use std::path::Path;

use super::load_config;

pub fn execute(routes: &Path) -> Result<()> {
    let config = load_config(routes)?;

    println!("{}", "Checking route declarations...".green().bold());
    println!();

    if config.routes.is_empty() {
        println!("{}", "No routes declared".yellow());
        return Ok(());
    }

    let problems = problems(&config);

    for (index, route) in config.routes.iter().enumerate() {
        let path = route.path.as_deref().unwrap_or("<missing>");
        match problems.iter().find(|(i, _)| *i == index) {
            Some((_, err)) => println!("  {} {} {}", "✗".red(), path, err.to_string().red()),
            None => println!("  {} {} {}", "✓".green(), path.cyan(), describe(route).dimmed()),
        }
    }

    println!();
    if !problems.is_empty() {
        anyhow::bail!("{} of {} route declarations are invalid", problems.len(), config.routes.len());
    }

    println!("{} {} routes OK", "✓".green(), config.routes.len());
    Ok(())
}

/// Every invalid declaration with its position in the file
pub fn problems(config: &BreadcrumbsConfig) -> Vec<(usize, ConfigError)> {
    config
        .declarations()
        .iter()
        .enumerate()
        .filter_map(|(i, route)| route.validate().err().map(|err| (i, err)))
        .collect()
}

fn describe(route: &RouteConfig) -> String {
    let label = if route.hidden {
        "hidden".to_string()
    } else if let Some(template) = &route.template {
        format!("template {:?}", template)
    } else if let Some(text) = &route.breadcrumb {
        format!("{:?}", text)
    } else {
        "humanized".to_string()
    };

    match route.match_options {
        Some(options) => format!(
            "{} (exact: {}, strict: {}, sensitive: {})",
            label, options.exact, options.strict, options.sensitive
        ),
        None => label,
    }
}
