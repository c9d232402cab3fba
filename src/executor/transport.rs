//! HTTP transport for the content API.
//!
//! The executor only needs "POST this body with this bearer token and give me
//! the status and bytes back". [`Transport`] is that seam; [`HttpTransport`] is
//! the reqwest implementation used outside of tests.

use crate::error::{ContentError, FetchError};
use crate::query::GraphqlBody;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one GraphQL POST.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        token: &str,
        body: &GraphqlBody<'_>,
    ) -> Result<RawResponse, FetchError>;
}

fn map_http_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        FetchError::Transport(format!("Connection error: {}", error))
    } else if error.is_body() || error.is_decode() {
        FetchError::Transport(format!("Failed to read response body: {}", error))
    } else {
        FetchError::Transport(format!("HTTP error: {}", error))
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Result<Self, ContentError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ContentError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        token: &str,
        body: &GraphqlBody<'_>,
    ) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_http_error)?;
        Ok(RawResponse::new(status, bytes.to_vec()))
    }
}
