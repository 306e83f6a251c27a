//! Configuration types for the filters client.

use serde::{Deserialize, Serialize};

/// Default API base URL (the frontend dev server proxies `/api`).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/api";

/// Path of the filters endpoint, relative to the base URL.
pub const DEFAULT_FILTERS_PATH: &str = "/report/filters";

/// Where the filters endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Filters endpoint path, starting with `/`.
    pub filters_path: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            filters_path: DEFAULT_FILTERS_PATH.to_string(),
        }
    }
}

impl ClientSettings {
    /// Settings pointing at another base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the filters endpoint.
    #[must_use]
    pub fn filters_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.filters_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
