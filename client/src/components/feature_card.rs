//! Feature highlight card for the landing grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::landing::Feature;

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="card__header">
                <Icon name={feature.icon} class="feature-card__icon"/>
                <h3 class="card__title">{feature.title}</h3>
                <p class="card__description">{feature.description}</p>
            </div>
        </div>
    }
}
