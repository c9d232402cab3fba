//! Query Executor
//!
//! Sends a [`QueryRequest`] to the content API and returns the decoded
//! [`ContentEnvelope`]. One request is exactly one POST: there is no retry,
//! no backoff and no timeout beyond what the transport itself enforces. Every
//! failure is reported as a [`FetchError`] and is terminal for the caller.

use crate::envelope::ContentEnvelope;
use crate::error::FetchError;
use crate::query::{ContentMode, QueryRequest};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

mod cache;
mod transport;

pub use cache::PassCache;
pub use transport::{HttpTransport, RawResponse, Transport};

/// Maximum number of body bytes kept in a `FetchError::Status`.
const STATUS_BODY_LIMIT: usize = 512;

/// Published endpoint plus the suffix that selects draft content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    preview_suffix: String,
}

impl Endpoint {
    pub fn new(base: impl Into<String>, preview_suffix: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            preview_suffix: preview_suffix.into(),
        }
    }

    pub fn url_for(&self, mode: ContentMode) -> String {
        match mode {
            ContentMode::Published => self.base.clone(),
            ContentMode::Preview => format!("{}{}", self.base, self.preview_suffix),
        }
    }
}

/// Bearer credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Executes queries against one content API.
pub struct QueryExecutor {
    transport: Arc<dyn Transport>,
    endpoint: Endpoint,
    token: ApiToken,
    cache: Option<PassCache>,
}

impl QueryExecutor {
    pub fn new(transport: Arc<dyn Transport>, endpoint: Endpoint, token: ApiToken) -> Self {
        Self {
            transport,
            endpoint,
            token,
            cache: None,
        }
    }

    /// Deduplicate identical calls until the next [`QueryExecutor::begin_pass`].
    pub fn with_pass_cache(mut self) -> Self {
        self.cache = Some(PassCache::new());
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn cache(&self) -> Option<&PassCache> {
        self.cache.as_ref()
    }

    /// Start a new generation pass. Clears the pass cache, if any.
    pub fn begin_pass(&self) {
        if let Some(cache) = &self.cache {
            debug!(entries = cache.len(), hits = cache.hits(), "Clearing pass cache");
            cache.clear();
        }
    }

    pub async fn execute(&self, request: &QueryRequest) -> Result<ContentEnvelope, FetchError> {
        let operation = request.operation_name().unwrap_or("anonymous");
        let mode = request.mode();

        let cache_key = self.cache.as_ref().map(|_| PassCache::key_for(request));
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(envelope) = cache.get(key) {
                debug!(operation, %mode, "Pass cache hit");
                return Ok(envelope);
            }
        }

        let url = self.endpoint.url_for(mode);
        let started = Instant::now();

        let raw = self
            .transport
            .post(&url, self.token.expose(), &request.body())
            .await
            .map_err(|e| {
                warn!(operation, %mode, error = %e, "Content request failed");
                e
            })?;

        if !raw.is_success() {
            let body = truncate_body(&raw.body);
            warn!(operation, %mode, status = raw.status, "Content API returned non-success status");
            return Err(FetchError::Status {
                status: raw.status,
                body,
            });
        }

        let envelope = ContentEnvelope::from_slice(&raw.body).map_err(|e| {
            warn!(operation, %mode, error = %e, "Content API response rejected");
            e
        })?;

        debug!(
            operation,
            %mode,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content request completed"
        );

        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            cache.insert(key, envelope.clone());
        }
        Ok(envelope)
    }
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= STATUS_BODY_LIMIT {
        return text.into_owned();
    }
    let mut end = STATUS_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
