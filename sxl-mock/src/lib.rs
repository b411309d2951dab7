use async_trait::async_trait;
use serde_json::Value;
use sxl_core::{FetchError, ResourceKind, SxlConnector};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe runs. Serves deterministic documents from static
/// fixtures, routed by the path of the requested URL.
///
/// The ids `FAIL` and `TIMEOUT` are special: `FAIL` answers with HTTP 500 and
/// `TIMEOUT` sleeps briefly before answering.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(url: &str) -> FetchError {
        FetchError::status(404, "Not Found", url)
    }

    async fn maybe_fail_or_timeout(url: &str, id: &str) -> Result<(), FetchError> {
        match id {
            "FAIL" => Err(FetchError::status(500, "Internal Server Error", url)),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Split a request URL into the resource kind and the trailing id segment.
///
/// `https://host/v4/payloads/abc?x=1` → `(Payload, "abc")`.
#[must_use]
pub fn route(url: &str) -> Option<(ResourceKind, &str)> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut segments = path.rsplit('/');
    let id = segments.next()?;
    let kind = match segments.next()? {
        "launches" => ResourceKind::Launch,
        "payloads" => ResourceKind::Payload,
        "launchpads" => ResourceKind::Launchpad,
        _ => return None,
    };
    Some((kind, id))
}

#[async_trait]
impl SxlConnector for MockConnector {
    fn name(&self) -> &'static str {
        "sxl-mock"
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let (kind, id) = route(url).ok_or_else(|| Self::not_found(url))?;
        Self::maybe_fail_or_timeout(url, id).await?;
        let doc = match kind {
            ResourceKind::Launch => fixtures::launches::by_id(id),
            ResourceKind::Payload => fixtures::payloads::by_id(id),
            ResourceKind::Launchpad => fixtures::launchpads::by_id(id),
            _ => None,
        };
        doc.ok_or_else(|| Self::not_found(url))
    }
}
