//! Backend Endpoint Bindings
//!
//! reqwest wrappers for `/search` and `/weather`, organized by endpoint.

mod search;
mod weather;

use place_weather_core::ApiError;
use serde::de::DeserializeOwned;

pub use search::*;
pub use weather::*;

fn request_error(err: reqwest::Error) -> ApiError {
    if let Some(status) = err.status() {
        ApiError::Status(status.as_u16())
    } else if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

/// Sends the request and decodes a 2xx JSON answer.
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    request
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(request_error)?
        .json::<T>()
        .await
        .map_err(request_error)
}
