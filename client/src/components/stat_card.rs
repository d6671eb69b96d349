//! Statistic card for the dashboard grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::dashboard::Stat;

/// Label, headline value, and trend badge for one statistic.
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="card__header stat-card__header">
                <h3 class="card__title stat-card__label">{stat.label}</h3>
                <Icon name={stat.icon} class={stat.tone}/>
            </div>
            <div class="card__content">
                <div class="stat-card__value">{stat.value}</div>
                <span class="badge badge--secondary">{stat.trend}</span>
            </div>
        </div>
    }
}
