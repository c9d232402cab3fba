//! CLI parse: clap types for cms-content. No behavior; definitions only.

use crate::content::AccessorKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Content layer CLI - list pre-renderable paths and inspect CMS content
#[derive(Parser)]
#[command(name = "cms-content")]
#[command(about = "Query the headless CMS the way the site build does")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds config/)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (replaces global and workspace files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate detail paths to pre-render, across every configured locale
    Paths {
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the content of one blog post page
    Post {
        /// Locale (defaults to the configured default locale)
        #[arg(long)]
        locale: Option<String>,
        /// Post slug
        #[arg(long)]
        slug: String,
        /// Read draft content
        #[arg(long)]
        preview: bool,
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Run one content accessor and print its result as JSON
    Fetch {
        /// Accessor name (e.g. home-testimonials, post-by-slug, footer)
        accessor: AccessorKind,
        /// Locale (defaults to the configured default locale)
        #[arg(long)]
        locale: Option<String>,
        /// Read draft content
        #[arg(long)]
        preview: bool,
        /// Field pattern for expertises-by-field
        #[arg(long)]
        field: Option<String>,
        /// Slug for post-by-slug
        #[arg(long)]
        slug: Option<String>,
        /// Tag id for last-posts
        #[arg(long)]
        tag_id: Option<String>,
        /// Post id excluded from last-posts
        #[arg(long)]
        exclude_id: Option<String>,
    },
    /// Configuration commands (show, validate)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (token redacted)
    Show,
    /// Validate the effective configuration
    Validate,
}
