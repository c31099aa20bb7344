//! Runtime Configuration
//!
//! Read once from the host page: `<body data-api-base="https://host/prefix">`.
//! Without the attribute, requests go to the page's own origin.

use leptos::prelude::{document, window};

const API_BASE_ATTR: &str = "data-api-base";

pub const SEARCH_PATH: &str = "search";
pub const WEATHER_PATH: &str = "weather";

/// Shown as input placeholders; the backend falls back to these when a field is left out.
pub const DEFAULT_QUERY: &str = "coffee";
pub const DEFAULT_LOCATION: &str = "Los Angeles, CA";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute base URL without trailing slash.
    pub api_base: String,
}

impl AppConfig {
    pub fn from_document() -> Self {
        let base = document()
            .body()
            .and_then(|body| body.get_attribute(API_BASE_ATTR))
            .filter(|base| !base.trim().is_empty())
            .or_else(|| window().location().origin().ok());
        Self::with_base(base.as_deref().unwrap_or_default())
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
