use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Dismissable banner for the last search failure.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.store.error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-message">{message}</span>
                <button class="dismiss-btn" title="Dismiss" on:click=move |_| ctx.dismiss_error()>
                    "×"
                </button>
            </div>
        })
    }
}
