pub mod check;
pub mod matcher;
pub mod trail;

use anyhow::{Context, Result};
use rhtmx_breadcrumbs::BreadcrumbsConfig;
use std::path::Path;

/// Loads route declarations, failing when an explicitly named file is missing
pub fn load_config(path: &Path) -> Result<BreadcrumbsConfig> {
    if !path.exists() && path != Path::new("breadcrumbs.toml") {
        anyhow::bail!("Routes file not found: {:?}", path);
    }

    BreadcrumbsConfig::load(path)
        .with_context(|| format!("Failed to load routes from {:?}", path))
}
