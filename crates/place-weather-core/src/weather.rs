//! Weather forecast payloads.

use serde::{Deserialize, Serialize};

use crate::place::Place;

/// Temperatures for one day, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

/// One entry of the multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// `YYYY-MM-DD`
    pub date: String,
    pub temperature: Temperature,
    #[serde(default)]
    pub description: String,
    /// Percent
    pub humidity: f64,
    /// Metres per second
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    #[serde(default)]
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
}

/// Forecast returned by `/weather` and embedded in `/search` responses.
///
/// The backend answers `{}` when its provider is unreachable, so every
/// field defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub daily_forecast: Vec<DailyForecast>,
}

impl Weather {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.daily_forecast.is_empty()
    }

    pub fn from_json(text: &str) -> Result<Self, crate::ApiError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub weather: Weather,
}

impl SearchResponse {
    pub fn from_json(text: &str) -> Result<Self, crate::ApiError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "places": [
            {"Name": "Verve Coffee Roasters", "Address": "833 S Spring St, Los Angeles, CA 90014", "Category": "Coffee Shop"},
            {"Name": "Go Get Em Tiger", "Address": "230 N Larchmont Blvd, Los Angeles, CA 90004", "Category": "Café"}
        ],
        "weather": {
            "current": {"temperature": 21.37, "description": "clear sky", "humidity": 48, "wind_speed": 2.1},
            "daily_forecast": [
                {"date": "2024-10-20", "temperature": {"day": 21.37, "min": 19.8, "max": 22.4},
                 "description": "clear sky", "humidity": 48, "wind_speed": 2.1},
                {"date": "2024-10-21", "temperature": {"day": 23, "min": 17.5, "max": 24.1},
                 "description": "few clouds", "humidity": 40, "wind_speed": 3.6}
            ]
        }
    }"#;

    #[test]
    fn test_decode_search_response() {
        let response = SearchResponse::from_json(SEARCH_BODY).unwrap();
        assert_eq!(response.places.len(), 2);
        assert_eq!(response.places[1].name, "Go Get Em Tiger");

        let weather = &response.weather;
        assert_eq!(weather.current.as_ref().map(|c| c.description.as_str()), Some("clear sky"));
        assert_eq!(weather.daily_forecast.len(), 2);
        assert_eq!(weather.daily_forecast[0].date, "2024-10-20");
        assert_eq!(weather.daily_forecast[1].temperature.day, 23.0);
        assert_eq!(weather.daily_forecast[1].wind_speed, 3.6);
    }

    #[test]
    fn test_empty_object_weather() {
        let weather = Weather::from_json("{}").unwrap();
        assert!(weather.is_empty());

        let response = SearchResponse::from_json(r#"{"places": [], "weather": {}}"#).unwrap();
        assert!(response.places.is_empty());
        assert!(response.weather.is_empty());
    }

    #[test]
    fn test_malformed_forecast_is_decode_error() {
        let err = Weather::from_json(r#"{"daily_forecast": [{"date": "2024-10-20"}]}"#).unwrap_err();
        assert!(matches!(err, crate::ApiError::Decode(_)));
    }
}
