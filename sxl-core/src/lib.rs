//! sxl-core
//!
//! Core types, traits, and pure helpers shared across the sxl workspace.
//!
//! - `types`: launch, payload, and launchpad records plus the merged
//!   display-ready `EnrichedLaunch`.
//! - `connector`: the `SxlConnector` trait implemented by JSON fetchers.
//! - `endpoints`: URL templates for the three API resources.
//! - `extract`: total mappings from raw JSON into records.
//! - `date`: IMF-fixdate formatting of launch epochs.
#![warn(missing_docs)]

/// The `SxlConnector` trait implemented by JSON fetchers.
pub mod connector;
/// IMF-fixdate formatting of launch epochs.
pub mod date;
/// URL templates for the launch, payload, and launchpad resources.
pub mod endpoints;
/// Mapping of raw JSON responses into typed records.
pub mod extract;
pub mod types;

pub use connector::SxlConnector;
pub use date::{format_launch_date, imf_fixdate};
pub use endpoints::Endpoints;
pub use extract::{extract_launch, extract_launchpad, extract_payload};
pub use types::*;

pub use sxl_types::{
    DEFAULT_API_BASE, FetchError, FetchStrategy, Resource, ResourceKind, Selection,
    SxlConfig, SxlError,
};
