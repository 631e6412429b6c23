use anyhow::Result;
use colored::Colorize;
use rhtmx_breadcrumbs::{match_path, MatchOptions, MatchResult, RoutePattern};

pub fn execute(pattern: &str, pathname: &str, exact: bool, strict: bool, sensitive: bool) -> Result<()> {
    let options = MatchOptions::default()
        .with_exact(exact)
        .with_strict(strict)
        .with_sensitive(sensitive);

    match match_path(pathname, &RoutePattern::parse(pattern), options)? {
        Some(matched) => {
            println!("{} {}", "✓ matched".green().bold(), matched.url.cyan());
            for line in describe(&matched) {
                println!("  {}", line);
            }
        }
        None => println!("{} {} against {}", "✗ no match:".red(), pattern, pathname),
    }

    Ok(())
}

/// Match details, parameters sorted by name
pub fn describe(matched: &MatchResult) -> Vec<String> {
    let mut params: Vec<(&String, &String)> = matched.params.iter().collect();
    params.sort();

    std::iter::once(format!("exact: {}", matched.is_exact))
        .chain(params.into_iter().map(|(name, value)| format!("{} = {}", name, value)))
        .collect()
}
