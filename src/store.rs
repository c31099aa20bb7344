//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use place_weather_core::{ApiError, Coordinates, Place, RequestSequence, SearchResponse, Weather};
use reactive_stores::Store;

/// What the weather modal is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Loading { place_name: String },
    Showing { place_name: String, weather: Weather },
    Failed { place_name: String, message: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn place_name(&self) -> Option<&str> {
        match self {
            ModalState::Closed => None,
            ModalState::Loading { place_name }
            | ModalState::Showing { place_name, .. }
            | ModalState::Failed { place_name, .. } => Some(place_name),
        }
    }

    pub fn title(&self) -> String {
        format!("Weather Forecast for {}", self.place_name().unwrap_or_default())
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Results of the latest search, in server order
    pub places: Vec<Place>,
    /// Forecast returned alongside the latest search; used for places without coordinates
    pub search_weather: Weather,
    /// True once any search has completed
    pub has_searched: bool,
    /// A search request is in flight
    pub searching: bool,
    /// Message for the error banner
    pub error: Option<String>,
    pub modal: ModalState,
    /// Only the newest search may write results
    pub search_seq: RequestSequence,
    /// Only the newest weather request may write the modal
    pub weather_seq: RequestSequence,
}

impl AppState {
    /// Marks a search as in flight and returns its ticket.
    pub fn begin_search(&mut self) -> u64 {
        self.searching = true;
        self.error = None;
        self.search_seq.next_ticket()
    }

    /// Applies a search outcome. Returns false when a newer search superseded it.
    pub fn apply_search_result(&mut self, ticket: u64, result: Result<SearchResponse, ApiError>) -> bool {
        if !self.search_seq.is_current(ticket) {
            return false;
        }

        self.searching = false;
        self.has_searched = true;
        match result {
            Ok(response) => {
                self.places = response.places;
                self.search_weather = response.weather;
            }
            Err(e) => {
                self.places.clear();
                self.search_weather = Weather::default();
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Opens the modal for `place`.
    ///
    /// Returns the ticket and coordinates of the `/weather` request to issue,
    /// or `None` when the forecast from the last search is shown directly.
    pub fn select_place(&mut self, place: &Place) -> Option<(u64, Coordinates)> {
        let place_name = place.display_name().to_string();

        let Some(coordinates) = place.coordinates() else {
            self.weather_seq.invalidate();
            self.modal = ModalState::Showing { place_name, weather: self.search_weather.clone() };
            return None;
        };

        self.modal = ModalState::Loading { place_name };
        Some((self.weather_seq.next_ticket(), coordinates))
    }

    /// Applies a `/weather` outcome. Returns false when it is stale or the modal was closed.
    pub fn apply_weather_result(&mut self, ticket: u64, result: Result<Weather, ApiError>) -> bool {
        if !self.weather_seq.is_current(ticket) {
            return false;
        }

        let place_name = self.modal.place_name().unwrap_or_default().to_string();
        self.modal = match result {
            Ok(weather) => ModalState::Showing { place_name, weather },
            Err(e) => ModalState::Failed { place_name, message: e.user_message() },
        };
        true
    }

    /// Hides the modal; an in-flight forecast is discarded.
    pub fn close_modal(&mut self) {
        self.weather_seq.invalidate();
        self.modal = ModalState::Closed;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use place_weather_core::{DailyForecast, Temperature, WeatherRequest};

    fn make_place(name: &str, coordinates: Option<(f64, f64)>) -> Place {
        Place {
            name: name.to_string(),
            address: "N/A".to_string(),
            category: "Coffee Shop".to_string(),
            latitude: coordinates.map(|c| c.0),
            longitude: coordinates.map(|c| c.1),
        }
    }

    fn make_weather(date: &str) -> Weather {
        Weather {
            current: None,
            daily_forecast: vec![DailyForecast {
                date: date.to_string(),
                temperature: Temperature { day: 21.0, min: 18.5, max: 23.0 },
                description: "clear sky".to_string(),
                humidity: 48.0,
                wind_speed: 2.1,
            }],
        }
    }

    fn make_response(names: &[&str], date: &str) -> SearchResponse {
        SearchResponse {
            places: names.iter().map(|n| make_place(n, None)).collect(),
            weather: make_weather(date),
        }
    }

    #[test]
    fn test_closed_modal() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.place_name(), None);
    }

    #[test]
    fn test_title_follows_place() {
        let loading = ModalState::Loading { place_name: "Grand Central Market".to_string() };
        assert!(loading.is_open());
        assert_eq!(loading.title(), "Weather Forecast for Grand Central Market");

        let failed = ModalState::Failed {
            place_name: "Verve".to_string(),
            message: "The server had a problem (502). Try again later.".to_string(),
        };
        assert!(failed.is_open());
        assert_eq!(failed.place_name(), Some("Verve"));
    }

    #[test]
    fn test_search_success_replaces_results() {
        let mut state = AppState::default();
        let ticket = state.begin_search();
        assert!(state.searching);

        assert!(state.apply_search_result(ticket, Ok(make_response(&["Verve", "Go Get Em Tiger"], "2024-10-20"))));
        assert!(!state.searching);
        assert!(state.has_searched);
        assert_eq!(state.places.len(), 2);
        assert_eq!(state.places[0].name, "Verve");
        assert_eq!(state.search_weather.daily_forecast[0].date, "2024-10-20");
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_search_failure_clears_and_reports() {
        let mut state = AppState::default();
        let first = state.begin_search();
        state.apply_search_result(first, Ok(make_response(&["Verve"], "2024-10-20")));

        let second = state.begin_search();
        assert!(state.apply_search_result(second, Err(ApiError::Status(502))));
        assert!(state.places.is_empty());
        assert!(state.search_weather.is_empty());
        assert_eq!(state.error.as_deref(), Some("The server had a problem (502). Try again later."));
        assert!(!state.searching);
    }

    #[test]
    fn test_stale_search_is_dropped() {
        let mut state = AppState::default();
        let older = state.begin_search();
        let newer = state.begin_search();

        assert!(state.apply_search_result(newer, Ok(make_response(&["Newer"], "2024-10-21"))));
        assert!(!state.apply_search_result(older, Ok(make_response(&["Older"], "2024-10-20"))));
        assert_eq!(state.places[0].name, "Newer");
        assert_eq!(state.search_weather.daily_forecast[0].date, "2024-10-21");
    }

    #[test]
    fn test_place_without_coordinates_uses_search_weather() {
        let mut state = AppState::default();
        let ticket = state.begin_search();
        state.apply_search_result(ticket, Ok(make_response(&["Verve"], "2024-10-20")));

        let place = state.places[0].clone();
        assert_eq!(state.select_place(&place), None);
        assert_eq!(
            state.modal,
            ModalState::Showing { place_name: "Verve".to_string(), weather: make_weather("2024-10-20") }
        );
    }

    #[test]
    fn test_place_with_coordinates_requests_weather() {
        let mut state = AppState::default();
        let place = make_place("Grand Central Market", Some((34.0508, -118.2489)));

        let (ticket, coordinates) = state.select_place(&place).unwrap();
        assert_eq!(state.modal, ModalState::Loading { place_name: "Grand Central Market".to_string() });
        assert_eq!(
            WeatherRequest::from(coordinates).to_json().unwrap(),
            r#"{"lat":34.0508,"lon":-118.2489}"#
        );

        assert!(state.apply_weather_result(ticket, Ok(make_weather("2024-10-22"))));
        assert_eq!(
            state.modal,
            ModalState::Showing { place_name: "Grand Central Market".to_string(), weather: make_weather("2024-10-22") }
        );
    }

    #[test]
    fn test_weather_failure_shows_in_modal() {
        let mut state = AppState::default();
        let (ticket, _) = state.select_place(&make_place("Verve", Some((34.0, -118.0)))).unwrap();

        assert!(state.apply_weather_result(ticket, Err(ApiError::Network("offline".to_string()))));
        assert!(matches!(state.modal, ModalState::Failed { ref place_name, .. } if place_name == "Verve"));
    }

    #[test]
    fn test_stale_weather_is_dropped() {
        let mut state = AppState::default();
        let (first, _) = state.select_place(&make_place("First", Some((1.0, 2.0)))).unwrap();
        let (second, _) = state.select_place(&make_place("Second", Some((3.0, 4.0)))).unwrap();

        assert!(!state.apply_weather_result(first, Ok(make_weather("2024-10-20"))));
        assert_eq!(state.modal, ModalState::Loading { place_name: "Second".to_string() });
        assert!(state.apply_weather_result(second, Ok(make_weather("2024-10-21"))));
    }

    #[test]
    fn test_close_modal_cancels_forecast() {
        let mut state = AppState::default();
        let (ticket, _) = state.select_place(&make_place("Verve", Some((34.0, -118.0)))).unwrap();

        state.close_modal();
        assert!(!state.apply_weather_result(ticket, Ok(make_weather("2024-10-20"))));
        assert_eq!(state.modal, ModalState::Closed);
    }
}
