use async_trait::async_trait;
use serde_json::Value;

use crate::FetchError;

/// A source of JSON documents addressed by URL.
///
/// Implementations issue a single GET per call and never retry. Failures are
/// returned as [`FetchError`] values; whether a failure is fatal is decided by
/// the caller.
#[async_trait]
pub trait SxlConnector: Send + Sync {
    /// Stable connector name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetch `url` and parse the response body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}
