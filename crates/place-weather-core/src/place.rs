//! Place search results.

use serde::{Deserialize, Deserializer, Serialize};

const NOT_AVAILABLE: &str = "N/A";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One search result (keys match the backend's capitalised JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "Name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "Address", default = "not_available", deserialize_with = "null_as_not_available")]
    pub address: String,
    #[serde(rename = "Category", default = "not_available", deserialize_with = "null_as_not_available")]
    pub category: String,
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Place {
    /// Both coordinates, when the backend supplied them.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() { "Unnamed place" } else { trimmed }
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_not_available<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(not_available))
}
