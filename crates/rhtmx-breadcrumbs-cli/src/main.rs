mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "rhtmx-crumbs")]
#[command(version, about = "RHTMX Breadcrumbs - inspect breadcrumb trails for route declarations", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the breadcrumb trail for a pathname
    Trail {
        /// Location to resolve (may carry ?search and #hash)
        pathname: String,

        /// Route declarations file
        #[arg(short, long, default_value = "breadcrumbs.toml")]
        routes: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Let a declared root route contribute the first breadcrumb
        #[arg(long)]
        include_root: bool,
    },

    /// Validate route declarations
    Check {
        /// Route declarations file
        #[arg(short, long, default_value = "breadcrumbs.toml")]
        routes: PathBuf,
    },

    /// Match a single pattern against a pathname
    Match {
        /// Route pattern (e.g. /users/:id)
        pattern: String,

        /// Path to match
        pathname: String,

        /// Require the pattern to consume the whole path
        #[arg(long)]
        exact: bool,

        /// Make trailing slashes significant
        #[arg(long)]
        strict: bool,

        /// Match case-sensitively
        #[arg(long)]
        sensitive: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered list for the terminal
    Text,
    /// JSON array of breadcrumbs
    Json,
    /// HTML navigation markup
    Html,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Trail {
            pathname,
            routes,
            format,
            include_root,
        } => {
            commands::trail::execute(&pathname, &routes, format, include_root)?;
        }
        Commands::Check { routes } => {
            commands::check::execute(&routes)?;
        }
        Commands::Match {
            pattern,
            pathname,
            exact,
            strict,
            sensitive,
        } => {
            commands::matcher::execute(&pattern, &pathname, exact, strict, sensitive)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
