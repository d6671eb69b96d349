//! Full-page loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-page" role="status" aria-live="polite">
            <span class="spinner" aria-label="Loading"></span>
        </div>
    }
}
