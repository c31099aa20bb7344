//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod forecast;
mod place_card;
mod results_list;
mod search_bar;
mod weather_modal;

pub use error_banner::ErrorBanner;
pub use forecast::Forecast;
pub use place_card::PlaceCard;
pub use results_list::ResultsList;
pub use search_bar::SearchBar;
pub use weather_modal::WeatherModal;
