//! Config loading facade.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::SiteConfig;
use crate::error::ContentError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace
    /// files, then environment overrides.
    pub fn load(workspace_root: &Path) -> Result<SiteConfig, ContentError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = environment::add_to_builder(builder);

        let config: SiteConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<SiteConfig, ContentError> {
        if !path.exists() {
            return Err(ContentError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
