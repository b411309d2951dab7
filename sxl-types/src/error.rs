use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ResourceKind;

/// Failure of a single HTTP GET issued by a fetcher.
///
/// Fetchers return these as values; deciding whether a failure ends the run
/// is left to the caller.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    /// The server answered with a non-success status code.
    #[error("server response: '{reason}' (code: '{status}')")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, if known.
        reason: String,
        /// Requested URL.
        url: String,
    },

    /// The request could not be completed (DNS, connect, TLS, timeout, ...).
    #[error("request to {url} failed: {msg}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Human-readable transport error.
        msg: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {url}: {msg}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Parser error message.
        msg: String,
    },
}

impl FetchError {
    /// Helper: build a `Status` error.
    pub fn status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
            url: url.into(),
        }
    }

    /// Helper: build a `Transport` error.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Decode` error.
    pub fn decode(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// The URL the failed request targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

/// Unified error type for the sxl workspace.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SxlError {
    /// A fetch for one of the pipeline's resources failed.
    #[error("unable to obtain {kind} data: {source}")]
    Fetch {
        /// Which pipeline step issued the request.
        kind: ResourceKind,
        /// The underlying fetch failure.
        #[source]
        source: FetchError,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Configuration could not be assembled.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SxlError {
    /// Helper: tag a fetch failure with the resource kind it belongs to.
    #[must_use]
    pub const fn fetch(kind: ResourceKind, source: FetchError) -> Self {
        Self::Fetch { kind, source }
    }

    /// Resource kind of a fetch failure; `None` for non-fetch errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Fetch { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
