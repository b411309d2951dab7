//! sxl-spacex
//!
//! Public connector that implements `SxlConnector` on top of a shared
//! `reqwest::Client`. One GET per call, no retries, no custom headers beyond
//! the user agent.
#![warn(missing_docs)]

mod builder;

pub use builder::SpacexConnectorBuilder;

use async_trait::async_trait;
use serde_json::Value;
use sxl_core::{FetchError, SxlConnector};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("sxl/", env!("CARGO_PKG_VERSION"));

/// Public connector type. Production users construct it with
/// `SpacexConnector::new_default()` or `SpacexConnector::builder()`.
#[derive(Debug, Clone)]
pub struct SpacexConnector {
    http: reqwest::Client,
}

impl SpacexConnector {
    /// Name reported by [`SxlConnector::name`].
    pub const NAME: &'static str = "sxl-spacex";

    /// Build with a fresh `reqwest::Client` using transport defaults.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new_default() -> Result<Self, sxl_core::SxlError> {
        Self::builder().build()
    }

    /// Start building a connector with custom transport settings.
    #[must_use]
    pub fn builder() -> SpacexConnectorBuilder {
        SpacexConnectorBuilder::new()
    }

    /// Build from an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn transport_error(url: &str, err: &reqwest::Error) -> FetchError {
        let msg = if err.is_timeout() {
            format!("timed out: {err}")
        } else {
            err.to_string()
        };
        FetchError::transport(url, msg)
    }
}

#[async_trait]
impl SxlConnector for SpacexConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success response");
            return Err(FetchError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                url,
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(url, &e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::decode(url, e.to_string()))
    }
}
