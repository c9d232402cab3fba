//! Integration tests for the CMS content layer

mod cli_commands;
mod content_accessors;
mod path_enumeration;
mod query_building;
