//! Request bodies for the two backend endpoints.

use serde::Serialize;

use crate::error::ApiError;
use crate::place::Coordinates;

/// `POST /search` form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub location: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
        }
    }

    /// Trimmed, non-empty fields only; a missing key lets the backend
    /// fall back to its `coffee` / `Los Angeles, CA` defaults.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        [("query", self.query.trim()), ("location", self.location.trim())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

/// `POST /weather` JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherRequest {
    pub lat: f64,
    pub lon: f64,
}

impl WeatherRequest {
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

impl From<Coordinates> for WeatherRequest {
    fn from(c: Coordinates) -> Self {
        Self { lat: c.lat, lon: c.lon }
    }
}
