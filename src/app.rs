//! Place & Weather App
//!
//! Search bar, result cards and the forecast modal.

use leptos::prelude::*;

use crate::components::{ErrorBanner, ResultsList, SearchBar, WeatherModal};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Using API base '{}'", config.api_base).into());

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <main class="app-layout">
            <h1>"Find Places"</h1>
            <SearchBar />
            <ErrorBanner />
            <ResultsList />
            <WeatherModal />
        </main>
    }
}
