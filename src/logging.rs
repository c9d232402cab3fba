//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from the `[logging]` config section, overridden by `CMS_LOG*`
//! environment variables. Logs default to stderr so command output on stdout
//! stays machine-readable.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "CMS_LOG";
pub const LOG_FORMAT_ENV: &str = "CMS_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "CMS_LOG_OUTPUT";
pub const LOG_MODULES_ENV: &str = "CMS_LOG_MODULES";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format, terminal outputs only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(".cms-content/cms-content.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        parse_format(&self.format)?;
        parse_output(&self.output)?;
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (CMS_LOG, CMS_LOG_FORMAT, CMS_LOG_OUTPUT, CMS_LOG_MODULES)
/// 2. Configuration (including CLI flags folded into it)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), ContentError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
    };
    let ansi = config.color && output != LogOutput::File;

    let subscriber = Registry::default().with(filter);
    let result = match format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| ContentError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ContentError> {
    let log_file = &config.file;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ContentError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ContentError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ContentError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    for (module, module_level) in &config.modules {
        filter = filter.add_directive(parse_directive(module, module_level)?);
    }

    if let Ok(modules_str) = std::env::var(LOG_MODULES_ENV) {
        for module_spec in modules_str.split(',') {
            if let Some((module, level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module, level)?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, ContentError> {
    format!("{}={}", module.trim(), level.trim())
        .parse()
        .map_err(|e| ContentError::ConfigError(format!("Invalid log directive: {}", e)))
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, ContentError> {
    let format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| config.format.clone());
    parse_format(&format).map_err(ContentError::ConfigError)
}

fn determine_output(config: &LoggingConfig) -> Result<LogOutput, ContentError> {
    let output = std::env::var(LOG_OUTPUT_ENV).unwrap_or_else(|_| config.output.clone());
    parse_output(&output).map_err(ContentError::ConfigError)
}

fn parse_format(format: &str) -> Result<LogFormat, String> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        )),
    }
}

fn parse_output(output: &str) -> Result<LogOutput, String> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        other => Err(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
            other
        )),
    }
}
