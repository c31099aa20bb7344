//! Application Context
//!
//! Shared store, configuration and the user actions that drive requests,
//! provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use place_weather_core::{Place, SearchRequest};
use reactive_stores::Store;

use crate::api;
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// App-wide state and actions provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(AppState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Run a search and replace the result cards and the search weather.
    pub fn search(&self, request: SearchRequest) {
        let ctx = *self;
        let ticket = ctx.store.write().begin_search();
        web_sys::console::log_1(
            &format!("[Search] #{} query='{}' location='{}'", ticket, request.query, request.location).into(),
        );

        let config = ctx.config.get_value();
        spawn_local(async move {
            let result = api::search_places(&config, &request).await;
            match &result {
                Ok(response) => web_sys::console::log_1(
                    &format!("[Search] #{} returned {} places", ticket, response.places.len()).into(),
                ),
                Err(e) => web_sys::console::error_1(&format!("[Search] #{} failed: {}", ticket, e).into()),
            }

            if !ctx.store.write().apply_search_result(ticket, result) {
                web_sys::console::warn_1(&format!("[Search] Dropping stale response #{}", ticket).into());
            }
        });
    }

    /// Open the weather modal for a place.
    ///
    /// Places with coordinates get their own forecast from `/weather`; the
    /// rest show the forecast that came with the search.
    pub fn show_weather(&self, place: Place) {
        let ctx = *self;
        let Some((ticket, coordinates)) = ctx.store.write().select_place(&place) else {
            return;
        };

        let config = ctx.config.get_value();
        spawn_local(async move {
            let result = api::fetch_weather(&config, coordinates).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[Weather] {} failed: {}", place.display_name(), e).into());
            }

            if !ctx.store.write().apply_weather_result(ticket, result) {
                web_sys::console::warn_1(
                    &format!("[Weather] Dropping stale response for {}", place.display_name()).into(),
                );
            }
        });
    }

    pub fn close_modal(&self) {
        self.store.write().close_modal();
    }

    pub fn dismiss_error(&self) {
        self.store.error().set(None);
    }
}
