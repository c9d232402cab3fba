//! Configuration System
//!
//! Layered site configuration: built-in defaults, the global user file, the
//! workspace files and `CMS_CONTENT__*` environment overrides, merged in that
//! order. Validation collects every problem instead of stopping at the first.

use crate::error::ContentError;
use crate::locale::{Locale, LocaleSet};
use crate::logging::LoggingConfig;
use crate::paths::FallbackPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::{DEFAULT_ENDPOINT, DEFAULT_PREVIEW_SUFFIX, DEFAULT_TOKEN_ENV};
pub use sources::environment::ENV_PREFIX;
pub use sources::workspace_file::ENV_NAME_VAR;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub locales: LocaleConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Published GraphQL endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Appended to `endpoint` for draft content
    #[serde(default = "default_preview_suffix")]
    pub preview_suffix: String,

    /// Read-only API token. Falls back to the `token_env` variable when unset.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_preview_suffix() -> String {
    DEFAULT_PREVIEW_SUFFIX.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            preview_suffix: default_preview_suffix(),
            token: None,
            token_env: default_token_env(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Configured token, else the value of `token_env`. Blank values count as unset.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| {
                std::env::var(&self.token_env)
                    .ok()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
            })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!(
                "Endpoint must be an http(s) URL, got '{}'",
                endpoint
            ));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("Timeouts must be greater than zero".to_string());
        }
        if self.resolve_token().is_none() {
            return Err(format!(
                "No API token configured (set api.token or {})",
                self.token_env
            ));
        }
        Ok(())
    }
}

/// Locales the site is built for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_supported_locales")]
    pub supported: Vec<String>,

    #[serde(default = "default_locale")]
    pub default: String,
}

fn default_supported_locales() -> Vec<String> {
    vec!["en".to_string(), "fr".to_string()]
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: default_supported_locales(),
            default: default_locale(),
        }
    }
}

impl LocaleConfig {
    pub fn to_locale_set(&self) -> Result<LocaleSet, ContentError> {
        LocaleSet::new(
            self.supported.iter().map(|l| Locale::new(l.trim())).collect(),
            Locale::new(self.default.trim()),
        )
    }
}

/// Build-time behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Deduplicate identical queries within one generation pass
    #[serde(default)]
    pub cache_per_pass: bool,

    /// Routing of detail paths that were not enumerated
    #[serde(default = "default_fallback")]
    pub fallback: FallbackPolicy,
}

fn default_fallback() -> FallbackPolicy {
    FallbackPolicy::OnDemand
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cache_per_pass: false,
            fallback: default_fallback(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Api(String),
    Locales(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Api(msg) => write!(f, "api: {}", msg),
            ValidationError::Locales(msg) => write!(f, "locales: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SiteConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.api.validate() {
            errors.push(ValidationError::Api(e));
        }

        if let Err(e) = self.locales.to_locale_set() {
            errors.push(ValidationError::Locales(e.to_string()));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Same configuration with the token masked, for display.
    pub fn redacted(&self) -> SiteConfig {
        let mut config = self.clone();
        if config.api.token.is_some() {
            config.api.token = Some("***".to_string());
        }
        config
    }
}

/// Join validation errors into one `ConfigError`.
pub fn validation_failure(errors: &[ValidationError]) -> ContentError {
    let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    ContentError::ConfigError(format!(
        "Configuration validation failed:\n{}",
        msgs.join("\n")
    ))
}
