//! Shared sxl types: the workspace error, configuration primitives, and
//! resource labels used for routing, errors, and telemetry.
#![warn(missing_docs)]

mod config;
mod error;
mod resource;

pub use config::{DEFAULT_API_BASE, FetchStrategy, Selection, SxlConfig};
pub use error::{FetchError, SxlError};
pub use resource::{Resource, ResourceKind};
