//! Weather Modal Component
//!
//! Forecast dialog for the selected place. Closes via the × button, a click
//! on the backdrop, or Escape.

use leptos::ev;
use leptos::prelude::*;

use crate::components::Forecast;
use crate::context::AppContext;
use crate::store::{AppStateStoreFields, ModalState};

#[component]
pub fn WeatherModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Lives as long as the page
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.modal().read_untracked().is_open() {
            ctx.close_modal();
        }
    });

    let body = move || match store.modal().get() {
        ModalState::Closed => ().into_any(),
        ModalState::Loading { .. } => view! { <p class="loading">"Loading forecast..."</p> }.into_any(),
        ModalState::Failed { message, .. } => view! { <p class="modal-error">{message}</p> }.into_any(),
        ModalState::Showing { weather, .. } => view! { <Forecast weather=weather /> }.into_any(),
    };

    view! {
        <div
            id="weather-modal"
            class="modal"
            style:display=move || if store.modal().read().is_open() { "block" } else { "none" }
            on:click=move |_| ctx.close_modal()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="close-button" title="Close" on:click=move |_| ctx.close_modal()>
                    "×"
                </button>
                <h2>{move || store.modal().read().title()}</h2>
                {body}
            </div>
        </div>
    }
}
