use url::Url;

use crate::{DEFAULT_API_BASE, Resource, SxlError};

/// Fixed URL templates for the three API resources, rooted at a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_API_BASE).expect("DEFAULT_API_BASE is a valid URL"),
        }
    }
}

impl Endpoints {
    /// Root the templates at `base` (e.g. `https://api.spacexdata.com/v4`).
    ///
    /// # Errors
    /// Returns `Config` if `base` is not an absolute http(s) URL.
    pub fn new(base: &str) -> Result<Self, SxlError> {
        let base = Url::parse(base.trim())
            .map_err(|e| SxlError::Config(format!("invalid API base URL '{base}': {e}")))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(SxlError::Config(format!(
                "API base URL must be an http(s) URL, got '{base}'"
            )));
        }
        Ok(Self { base })
    }

    /// The configured base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/launches/{latest|next}`
    #[must_use]
    pub fn launch(&self, resource: Resource) -> String {
        self.join(&["launches", resource.as_str()])
    }

    /// `{base}/payloads/{id}`
    #[must_use]
    pub fn payload(&self, id: &str) -> String {
        self.join(&["payloads", id])
    }

    /// `{base}/launchpads/{id}`
    #[must_use]
    pub fn launchpad(&self, id: &str) -> String {
        self.join(&["launchpads", id])
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always writable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }
}
