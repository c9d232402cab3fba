//! Content Accessors
//!
//! [`ContentClient`] exposes one async method per content need of the site.
//! Each method validates the locale, builds a fresh request from the
//! [`catalog`], runs it through the [`QueryExecutor`] and unwraps the root
//! field. An absent root is `Ok(None)`; turning that into a "not found" page is
//! the caller's call. Accessors never re-sort what the CMS returns.

use crate::config::SiteConfig;
use crate::envelope::ContentEnvelope;
use crate::error::ContentError;
use crate::executor::{ApiToken, Endpoint, HttpTransport, QueryExecutor};
use crate::locale::{Locale, LocaleSet};
use crate::query::{ContentMode, Variables};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Build a variable map inline.
macro_rules! variables {
    ($($name:literal => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut vars = $crate::query::Variables::new();
        $(vars.insert($name.to_string(), ::serde_json::json!($value));)*
        vars
    }};
}
pub(crate) use variables;

pub mod catalog;
pub mod dispatch;
pub mod model;

mod agency;
mod blog;
mod expertise;
mod home;
mod references;
mod site;

pub use agency::AgencyPage;
pub use blog::{BlogPostPage, PageOutcome};
pub use catalog::QuerySpec;
pub use dispatch::AccessorKind;
pub use home::HomePage;
pub use site::Footer;

/// Accessor facade over one content API.
#[derive(Clone)]
pub struct ContentClient {
    executor: Arc<QueryExecutor>,
    locales: LocaleSet,
}

impl ContentClient {
    pub fn new(executor: Arc<QueryExecutor>, locales: LocaleSet) -> Self {
        Self { executor, locales }
    }

    /// Build the HTTP-backed client described by `config`.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ContentError> {
        let api = &config.api;
        let token = api.resolve_token().ok_or_else(|| {
            ContentError::ConfigError(
                "No API token configured (set api.token or DATOCMS_API_TOKEN)".to_string(),
            )
        })?;
        let transport = HttpTransport::new(api.connect_timeout(), api.request_timeout())?;
        let mut executor = QueryExecutor::new(
            Arc::new(transport),
            Endpoint::new(api.endpoint.clone(), api.preview_suffix.clone()),
            ApiToken::new(token),
        );
        if config.build.cache_per_pass {
            executor = executor.with_pass_cache();
        }
        Ok(Self::new(Arc::new(executor), config.locales.to_locale_set()?))
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    /// Mark the start of a generation pass (clears the pass cache when enabled).
    pub fn begin_pass(&self) {
        self.executor.begin_pass();
    }

    /// Run `spec` for `locale` and decode the payload at `spec.root`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        spec: &QuerySpec,
        mode: ContentMode,
        locale: &Locale,
        extra: Variables,
    ) -> Result<Option<T>, ContentError> {
        let envelope = self.fetch_envelope(spec, mode, locale, extra).await?;
        Ok(envelope.path(spec.root)?)
    }

    /// Run `spec` for `locale` and return the whole envelope.
    pub(crate) async fn fetch_envelope(
        &self,
        spec: &QuerySpec,
        mode: ContentMode,
        locale: &Locale,
        extra: Variables,
    ) -> Result<ContentEnvelope, ContentError> {
        self.locales.ensure_supported(locale)?;

        let mut request = spec.request(mode, locale);
        for (name, value) in extra {
            request = request.with_variable(name, value);
        }

        debug!(operation = spec.name, %locale, %mode, "Fetching content");
        Ok(self.executor.execute(&request).await?)
    }
}
