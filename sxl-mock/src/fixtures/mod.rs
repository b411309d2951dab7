//! Static documents shaped like SpaceX API v4 responses.

pub mod launches;
pub mod launchpads;
pub mod payloads;
