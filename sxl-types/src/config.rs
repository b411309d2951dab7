//! Configuration types shared by the orchestrator, connectors, and binary.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Resource, SxlError};

/// Root of the public SpaceX REST API (v4).
pub const DEFAULT_API_BASE: &str = "https://api.spacexdata.com/v4";

/// How the two dependent lookups (payload, launchpad) of one launch are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Payload first, then launchpad; one request in flight at a time.
    #[default]
    Sequential,
    /// Issue both lookups together and wait for both.
    Concurrent,
}

impl FromStr for FetchStrategy {
    type Err = SxlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(SxlError::InvalidArg(format!(
                "unknown fetch strategy '{other}' (expected 'sequential' or 'concurrent')"
            ))),
        }
    }
}

/// Which launch resources a run shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Latest, then next.
    #[default]
    Both,
    /// Only the latest launch.
    LatestOnly,
    /// Only the next scheduled launch.
    NextOnly,
}

impl Selection {
    /// Build from the `--last` / `--next` flags. Neither or both select both.
    #[must_use]
    pub const fn from_flags(last: bool, next: bool) -> Self {
        match (last, next) {
            (true, false) => Self::LatestOnly,
            (false, true) => Self::NextOnly,
            _ => Self::Both,
        }
    }

    /// Resources to process, in output order.
    #[must_use]
    pub const fn resources(self) -> &'static [Resource] {
        match self {
            Self::Both => &[Resource::Latest, Resource::Next],
            Self::LatestOnly => &[Resource::Latest],
            Self::NextOnly => &[Resource::Next],
        }
    }
}

/// Run configuration, produced once at startup and passed by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SxlConfig {
    /// API root that endpoint templates are built on.
    pub api_base: String,
    /// Strategy for the two dependent lookups of a launch.
    pub fetch_strategy: FetchStrategy,
    /// Optional per-request timeout. `None` leaves the transport default.
    pub request_timeout: Option<Duration>,
    /// Which launch resources to show.
    pub selection: Selection,
}

impl Default for SxlConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            fetch_strategy: FetchStrategy::default(),
            request_timeout: None,
            selection: Selection::default(),
        }
    }
}
