use serde_json::Value;
use sxl_core::{
    EnrichedLaunch, FetchStrategy, Resource, ResourceKind, SxlError, UNKNOWN_SUMMARY,
    extract_launch, extract_launchpad, extract_payload, format_launch_date,
};

use crate::Sxl;
use crate::router::util::join_pair;

impl Sxl {
    /// Fetch and enrich the launch behind one of the two fixed resources.
    ///
    /// # Errors
    /// See [`Self::enrich`].
    #[tracing::instrument(
        name = "sxl::router::launch",
        skip(self),
        fields(resource = %resource),
    )]
    pub async fn launch(&self, resource: Resource) -> Result<EnrichedLaunch, SxlError> {
        let url = self.endpoints.launch(resource);
        self.enrich(&url).await
    }

    /// Fetch a launch record and merge it with its payload and launchpad.
    ///
    /// Behavior and trade-offs:
    /// - The launch fetch completes before any dependent request is issued; if it
    ///   fails nothing else is requested.
    /// - The payload and launchpad lookups follow the configured `FetchStrategy`.
    ///   Output is identical under both strategies.
    /// - A launch without a payload or launchpad reference skips that lookup and
    ///   gets an `Unknown` summary instead of failing.
    ///
    /// # Errors
    /// Returns `SxlError::Fetch` tagged with the kind of the first failed fetch.
    /// Nothing is retried.
    #[tracing::instrument(
        name = "sxl::router::enrich",
        skip(self),
        fields(strategy = ?self.cfg.fetch_strategy),
    )]
    pub async fn enrich(&self, resource_url: &str) -> Result<EnrichedLaunch, SxlError> {
        let doc = self.fetch(ResourceKind::Launch, resource_url).await?;
        let launch = extract_launch(&doc);
        let display_date = format_launch_date(launch.launch_epoch);

        // Lazy until polled: the sequential arm really issues one at a time.
        let payload = self.payload_summary(launch.payload_ref.as_deref());
        let launchpad = self.launchpad_summary(launch.launchpad_ref.as_deref());

        let (payload_summary, launchpad_summary) = match self.cfg.fetch_strategy {
            FetchStrategy::Concurrent => join_pair(payload, launchpad).await?,
            _ => {
                let p = payload.await?;
                let l = launchpad.await?;
                (p, l)
            }
        };

        Ok(EnrichedLaunch {
            launch,
            display_date,
            payload_summary,
            launchpad_summary,
        })
    }

    async fn payload_summary(&self, id: Option<&str>) -> Result<String, SxlError> {
        let Some(id) = id else {
            tracing::warn!("launch has no payload reference; payload details unknown");
            return Ok(UNKNOWN_SUMMARY.to_string());
        };
        let doc = self
            .fetch(ResourceKind::Payload, &self.endpoints.payload(id))
            .await?;
        Ok(extract_payload(&doc).to_string())
    }

    async fn launchpad_summary(&self, id: Option<&str>) -> Result<String, SxlError> {
        let Some(id) = id else {
            tracing::warn!("launch has no launchpad reference; launchpad details unknown");
            return Ok(UNKNOWN_SUMMARY.to_string());
        };
        let doc = self
            .fetch(ResourceKind::Launchpad, &self.endpoints.launchpad(id))
            .await?;
        Ok(extract_launchpad(&doc).to_string())
    }

    async fn fetch(&self, kind: ResourceKind, url: &str) -> Result<Value, SxlError> {
        tracing::debug!(connector = self.connector.name(), kind = %kind, url, "fetching");
        self.connector
            .fetch_json(url)
            .await
            .map_err(|e| SxlError::fetch(kind, e))
    }
}
