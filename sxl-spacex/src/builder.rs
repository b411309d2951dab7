use std::time::Duration;

use sxl_core::SxlError;

use crate::{SpacexConnector, USER_AGENT};

/// Builder for [`SpacexConnector`] transport settings.
#[derive(Debug, Clone)]
pub struct SpacexConnectorBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for SpacexConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpacexConnectorBuilder {
    /// No timeout, default user agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Bound each request (connect through body) by `timeout`.
    ///
    /// `None` keeps the transport default, which never times out.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Config` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<SpacexConnector, SxlError> {
        let mut http = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| SxlError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(SpacexConnector::with_client(http))
    }
}
