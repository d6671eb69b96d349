//! One entry in the dashboard's recent-activity list.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::dashboard::Activity;

#[component]
pub fn ActivityRow(activity: Activity) -> impl IntoView {
    let status = activity.status;

    view! {
        <div class="activity-row" data-status={status.as_str()}>
            <span title={status.label()}>
                <Icon name={status.icon()} class={status.tone()}/>
            </span>
            <div class="activity-row__body">
                <p class="activity-row__title">{activity.title}</p>
                <p class="activity-row__time">{activity.time}</p>
            </div>
        </div>
    }
}
