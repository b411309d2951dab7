//! sxl obtains the 'latest' and 'next' SpaceX launches.
//!
//! Overview
//! - Fetches a launch record through an `sxl_core::SxlConnector`.
//! - Enriches it with two dependent lookups (payload, launchpad) whose URLs are
//!   derived from the launch record.
//! - Merges everything into an `EnrichedLaunch` and renders a text block.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy for the dependent lookups:
//!   - `Sequential`: payload then launchpad; one request in flight, reference
//!     ordering of requests.
//!   - `Concurrent`: both lookups in flight together; lower latency, identical
//!     output. When both fail the payload failure is reported.
//! - Any fetch failure ends the pipeline immediately and is returned tagged with
//!   the `ResourceKind` that failed; nothing is retried.
//! - Missing fields never fail: they render as `UNKNOWN` sentinels.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use sxl::{Resource, Style, Sxl, render};
//! use sxl_spacex::SpacexConnector;
//!
//! let sxl = Sxl::builder()
//!     .with_connector(Arc::new(SpacexConnector::new_default()?))
//!     .build()?;
//! let latest = sxl.launch(Resource::Latest).await?;
//! print!("{}", render(&latest, Resource::Latest, Style::Plain));
//! ```
#![warn(missing_docs)]

pub mod cli;
pub(crate) mod core;
pub mod render;
mod router;

pub use core::{Sxl, SxlBuilder};
pub use render::{Style, banner, render};

// Re-export core types for convenience
pub use sxl_core::{
    DEFAULT_API_BASE, EnrichedLaunch, Endpoints, FetchError, FetchStrategy, LaunchRecord,
    LaunchpadSummary, PayloadSummary, Resource, ResourceKind, Selection, SxlConfig, SxlConnector,
    SxlError,
};
