//! Search Bar Component
//!
//! Query and location inputs; Enter in either field or the button runs a search.

use leptos::prelude::*;
use place_weather_core::SearchRequest;

use crate::config::{DEFAULT_LOCATION, DEFAULT_QUERY};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Enter runs a search unless it is confirming an IME composition.
fn submits_search(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (query, set_query) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let run_search = move || {
        ctx.search(SearchRequest::new(query.get_untracked(), location.get_untracked()));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if submits_search(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            run_search();
        }
    };

    view! {
        <div class="search-bar">
            <input
                id="searchQuery"
                type="text"
                placeholder=format!("What? (e.g. {})", DEFAULT_QUERY)
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <input
                id="location"
                type="text"
                placeholder=format!("Where? (e.g. {})", DEFAULT_LOCATION)
                prop:value=move || location.get()
                on:input=move |ev| set_location.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="search-button"
                disabled=move || ctx.store.searching().get()
                on:click=move |_| run_search()
            >
                "Search"
            </button>
        </div>
    }
}
