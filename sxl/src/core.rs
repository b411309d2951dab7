use std::sync::Arc;

use sxl_core::{Endpoints, FetchStrategy, SxlConfig, SxlConnector, SxlError};

/// Orchestrator that fetches a launch and enriches it with its dependent lookups.
pub struct Sxl {
    pub(crate) connector: Arc<dyn SxlConnector>,
    pub(crate) endpoints: Endpoints,
    pub(crate) cfg: SxlConfig,
}

/// Builder for constructing an `Sxl` orchestrator with custom configuration.
pub struct SxlBuilder {
    connector: Option<Arc<dyn SxlConnector>>,
    cfg: SxlConfig,
}

impl Default for SxlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SxlBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connector; you must register one via [`Self::with_connector`].
    /// - Defaults to the public v4 API root and sequential dependent lookups.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: SxlConfig::default(),
        }
    }

    /// Register the connector used for every fetch. A later call replaces an
    /// earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn SxlConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SxlConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the API root the endpoint templates are built on.
    ///
    /// The value is validated in [`Self::build`].
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.cfg.api_base = base.into();
        self
    }

    /// Select how the payload and launchpad lookups of a launch are driven.
    ///
    /// Behavior and trade-offs:
    /// - `Sequential`: payload then launchpad; never more than one request in
    ///   flight, and a payload failure means the launchpad is never requested.
    /// - `Concurrent`: both in flight together; roughly halves enrichment latency
    ///   at the cost of a possibly wasted request when one of them fails.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Build the `Sxl` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered via
    /// [`Self::with_connector`], or `Config` if the API root is not a usable
    /// http(s) URL.
    pub fn build(self) -> Result<Sxl, SxlError> {
        let Some(connector) = self.connector else {
            return Err(SxlError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        let endpoints = Endpoints::new(&self.cfg.api_base)?;

        Ok(Sxl {
            connector,
            endpoints,
            cfg: self.cfg,
        })
    }
}

impl Sxl {
    /// Start building a new `Sxl` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use sxl::{FetchStrategy, Sxl};
    /// use sxl_spacex::SpacexConnector;
    ///
    /// let sxl = Sxl::builder()
    ///     .with_connector(Arc::new(SpacexConnector::new_default()?))
    ///     .fetch_strategy(FetchStrategy::Concurrent)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SxlBuilder {
        SxlBuilder::new()
    }

    /// Endpoint templates in use.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &SxlConfig {
        &self.cfg
    }

    /// Name of the registered connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }
}
