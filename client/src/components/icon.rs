//! Named icon glyph. Icons are referenced by name; the icon font maps
//! `icon--{name}` classes to glyphs.

use leptos::prelude::*;

#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class={format!("icon icon--{name} {class}")} aria-hidden="true"></i> }
}
