use place_weather_core::{ApiError, SearchRequest, SearchResponse};

use super::send_json;
use crate::config::{AppConfig, SEARCH_PATH};

/// `POST /search` with a form-encoded query and location.
pub async fn search_places(config: &AppConfig, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
    let builder = reqwest::Client::new()
        .post(config.endpoint(SEARCH_PATH))
        .form(&request.form_fields());
    send_json(builder).await
}
