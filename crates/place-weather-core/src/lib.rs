//! Place & Weather Core
//!
//! Wire types shared with the backend, request encoding, and the
//! formatting helpers the UI renders with. No browser dependencies.

mod error;
mod format;
mod place;
mod request;
mod sequence;
mod weather;

pub use error::ApiError;
pub use format::{format_celsius, format_day_heading, format_humidity, format_wind_speed};
pub use place::{Coordinates, Place};
pub use request::{SearchRequest, WeatherRequest};
pub use sequence::RequestSequence;
pub use weather::{CurrentConditions, DailyForecast, SearchResponse, Temperature, Weather};
