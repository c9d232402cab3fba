//! CLI route: single route table and run context. Dispatches to the content
//! layer and presentation.

use crate::config::{validation_failure, ConfigLoader, SiteConfig};
use crate::content::dispatch::AccessorArgs;
use crate::content::ContentClient;
use crate::error::ContentError;
use crate::locale::Locale;
use crate::paths::PathEnumerator;
use crate::query::ContentMode;
use std::path::PathBuf;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::info;

use crate::cli::parse::{Commands, ConfigCommands, OutputFormat};
use crate::cli::{command_name, format_paths_text, format_post_page_text, format_validation_text};

/// Runtime context for CLI execution: effective configuration and the async
/// runtime the content layer runs on. The content client is built per command
/// so that `config` commands work without a token.
pub struct RunContext {
    config: SiteConfig,
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
    runtime: Runtime,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ContentError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(config, workspace_root, config_path)
    }

    pub fn with_config(
        config: SiteConfig,
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ContentError> {
        let runtime = Runtime::new().map_err(|e| {
            ContentError::ConfigError(format!("Failed to start async runtime: {}", e))
        })?;
        Ok(Self {
            config,
            workspace_root,
            config_path,
            runtime,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ContentError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ContentError> {
        match command {
            Commands::Paths { format } => self.handle_paths(*format),
            Commands::Post {
                locale,
                slug,
                preview,
                format,
            } => self.handle_post(locale.as_deref(), slug, *preview, *format),
            Commands::Fetch {
                accessor,
                locale,
                preview,
                field,
                slug,
                tag_id,
                exclude_id,
            } => {
                let client = self.client()?;
                let locale = self.locale_or_default(&client, locale.as_deref());
                let args = AccessorArgs {
                    pattern: field.clone(),
                    slug: slug.clone(),
                    tag_id: tag_id.clone(),
                    exclude_id: exclude_id.clone(),
                };
                let mode = ContentMode::from_preview(*preview);
                let value = self
                    .runtime
                    .block_on(accessor.run(&client, mode, &locale, &args))?;
                Ok(serde_json::to_string_pretty(&value)?)
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_paths(&self, format: OutputFormat) -> Result<String, ContentError> {
        let client = self.client()?;
        client.begin_pass();
        let paths = self.runtime.block_on(
            PathEnumerator::new(&client)
                .with_fallback(self.config.build.fallback)
                .enumerate(),
        )?;
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&paths)?),
            OutputFormat::Text => Ok(format_paths_text(&paths)),
        }
    }

    fn handle_post(
        &self,
        locale: Option<&str>,
        slug: &str,
        preview: bool,
        format: OutputFormat,
    ) -> Result<String, ContentError> {
        let client = self.client()?;
        let locale = self.locale_or_default(&client, locale);
        let mode = ContentMode::from_preview(preview);
        let outcome = self
            .runtime
            .block_on(client.post_page(mode, &locale, slug))?;
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&outcome)?),
            OutputFormat::Text => Ok(format_post_page_text(&outcome, slug)),
        }
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, ContentError> {
        match command {
            ConfigCommands::Show => {
                let source = match self.config_path {
                    Some(ref path) => format!("# source: {}\n", path.display()),
                    None => format!("# workspace: {}\n", self.workspace_root.display()),
                };
                let body = toml::to_string_pretty(&self.config.redacted()).map_err(|e| {
                    ContentError::Output(format!("Failed to render configuration: {}", e))
                })?;
                Ok(format!("{}{}", source, body))
            }
            ConfigCommands::Validate => {
                match self.config.validate() {
                    Ok(()) => Ok(format_validation_text(&Ok(()))),
                    Err(errors) => Err(ContentError::ConfigError(
                        format_validation_text(&Err(errors)).trim_end().to_string(),
                    )),
                }
            }
        }
    }

    fn client(&self) -> Result<ContentClient, ContentError> {
        self.config
            .validate()
            .map_err(|errors| validation_failure(&errors))?;
        ContentClient::from_config(&self.config)
    }

    fn locale_or_default(&self, client: &ContentClient, locale: Option<&str>) -> Locale {
        locale
            .map(Locale::new)
            .unwrap_or_else(|| client.locales().default_locale().clone())
    }
}
