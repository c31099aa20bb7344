use place_weather_core::{ApiError, Coordinates, Weather, WeatherRequest};

use super::send_json;
use crate::config::{AppConfig, WEATHER_PATH};

/// `POST /weather` with `{lat, lon}`.
pub async fn fetch_weather(config: &AppConfig, coordinates: Coordinates) -> Result<Weather, ApiError> {
    let builder = reqwest::Client::new()
        .post(config.endpoint(WEATHER_PATH))
        .json(&WeatherRequest::from(coordinates));
    send_json(builder).await
}
