//! Place Card Component
//!
//! One search result; clicking it opens the weather modal.

use leptos::prelude::*;
use place_weather_core::Place;

use crate::context::AppContext;

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let name = place.display_name().to_string();
    let address = place.address.clone();
    let category = place.category.clone();
    let has_coordinates = place.coordinates().is_some();

    view! {
        <div
            class="place-card"
            class:has-coordinates=has_coordinates
            title="Show weather forecast"
            on:click=move |_| ctx.show_weather(place.clone())
        >
            <h3>{name}</h3>
            <p class="place-address">{address}</p>
            <p class="place-category">{category}</p>
        </div>
    }
}
