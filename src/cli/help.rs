//! CLI command-name contract for logging.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log records (e.g. "paths", "config.show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Paths { .. } => "paths",
        Commands::Post { .. } => "post",
        Commands::Fetch { .. } => "fetch",
        Commands::Config { command } => match command {
            ConfigCommands::Show => "config.show",
            ConfigCommands::Validate => "config.validate",
        },
    }
}
