//! Error types for the content aggregation layer.

use crate::envelope::GraphqlErrorDetail;
use crate::locale::Locale;
use thiserror::Error;

/// Failure of a single content API call.
///
/// Every variant is fatal to the calling operation. The variants only exist so
/// that logs and CLI output can tell a dead network apart from a rejected query.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Content API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Content API returned errors: {}", join_messages(.errors))]
    Api { errors: Vec<GraphqlErrorDetail> },

    #[error("Failed to decode content API response: {0}")]
    Decode(String),
}

fn join_messages(errors: &[GraphqlErrorDetail]) -> String {
    if errors.is_empty() {
        return "(empty error list)".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Path enumeration aborted because one locale could not be listed.
#[derive(Debug, Error)]
#[error("Failed to enumerate '{content_type}' paths for locale '{locale}': {source}")]
pub struct EnumerationError {
    pub content_type: String,
    pub locale: Locale,
    #[source]
    pub source: FetchError,
}

/// Crate-wide error returned by accessors, the enumerator, config and CLI.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Enumeration(#[from] EnumerationError),

    #[error("Unsupported locale '{locale}' (supported: {supported})")]
    UnsupportedLocale { locale: String, supported: String },

    #[error("Unknown accessor: {0}")]
    UnknownAccessor(String),

    #[error("Accessor '{accessor}' requires --{argument}")]
    MissingArgument {
        accessor: &'static str,
        argument: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ContentError {
    fn from(err: config::ConfigError) -> Self {
        ContentError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Output(err.to_string())
    }
}
