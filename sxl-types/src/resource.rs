use core::fmt;
use serde::{Deserialize, Serialize};

/// The kind of API resource a request targets.
///
/// Used to tag fetch failures so the entry point can tell which step of a
/// pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ResourceKind {
    /// A launch record (`/launches/latest`, `/launches/next`).
    Launch,
    /// A payload record (`/payloads/{id}`).
    Payload,
    /// A launchpad record (`/launchpads/{id}`).
    Launchpad,
}

impl ResourceKind {
    /// Stable, lowercase identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Payload => "payload",
            Self::Launchpad => "launchpad",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two launch resources the tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// The most recent launch.
    Latest,
    /// The next scheduled launch.
    Next,
}

impl Resource {
    /// Path segment under `/launches/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Next => "next",
        }
    }

    /// Heading label used when rendering a block for this resource.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Next => "Next Scheduled",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
