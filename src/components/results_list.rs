//! Results List Component
//!
//! Renders one card per place from the latest search, in server order.

use leptos::prelude::*;

use crate::components::PlaceCard;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ResultsList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let show_empty = move || {
        store.has_searched().get()
            && !store.searching().get()
            && store.error().read().is_none()
            && store.places().read().is_empty()
    };

    view! {
        <div id="results-container" class="results-container">
            <Show when=move || store.searching().get()>
                <div class="loading">"Searching..."</div>
            </Show>

            <Show when=show_empty>
                <p class="no-results">"No places found"</p>
            </Show>

            <For
                each=move || store.places().get().into_iter().enumerate()
                key=|(index, place)| (*index, place.name.clone(), place.address.clone())
                children=move |(_, place)| view! { <PlaceCard place=place /> }
            />
        </div>
    }
}
