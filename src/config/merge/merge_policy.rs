//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win: defaults < global file < workspace files < environment.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com";
pub const DEFAULT_PREVIEW_SUFFIX: &str = "/preview";
pub const DEFAULT_TOKEN_ENV: &str = "DATOCMS_API_TOKEN";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("api.endpoint", DEFAULT_ENDPOINT)?
        .set_default("api.preview_suffix", DEFAULT_PREVIEW_SUFFIX)?
        .set_default("api.token_env", DEFAULT_TOKEN_ENV)?
        .set_default("api.connect_timeout_secs", 10)?
        .set_default("api.request_timeout_secs", 60)?
        .set_default("locales.supported", vec!["en", "fr"])?
        .set_default("locales.default", "en")?
        .set_default("build.cache_per_pass", false)?
        .set_default("build.fallback", "on_demand")
}
