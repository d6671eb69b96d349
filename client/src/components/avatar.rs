//! Circular avatar with an initials fallback.

use leptos::prelude::*;

#[component]
pub fn Avatar(initials: String) -> impl IntoView {
    view! {
        <span class="avatar">
            <span class="avatar__fallback">{initials}</span>
        </span>
    }
}
