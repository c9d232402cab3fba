//! CLI domain: parse, route, help, output, and presentation only.
//! No content logic; the route table dispatches to the content layer.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, OutputFormat};
pub use presentation::{
    format_paths_text, format_post_page_text, format_validation_text,
};
pub use route::RunContext;
