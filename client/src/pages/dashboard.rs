//! Dashboard page: account header, statistic cards, recent activity, and
//! quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. While the session lookup is in flight it
//! shows a spinner; once resolved without a user it sends the visitor to
//! `/login` and draws nothing.
//!
//! Logging out only tells the auth provider. The redirect to `/login` comes
//! from the state change that follows, not from this page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::activity_row::ActivityRow;
use crate::components::avatar::Avatar;
use crate::components::icon::Icon;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::stat_card::StatCard;
use crate::net::types::User;
use crate::state::auth::{AuthPhase, AuthState, AuthStore};
use crate::state::dashboard::{Activity, QUICK_ACTIONS, QuickAction, RECENT_ACTIVITY, STATS, Stat};
use crate::util::auth::{AuthProvider, Navigator, RedirectGuard, install_redirect};
use crate::util::initials::initials;
use crate::util::route::Route;

/// Header identity for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub initials: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self { initials: initials(&user.name), name: user.name.clone(), email: user.email.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardModel {
    pub profile: Profile,
    pub stats: &'static [Stat],
    pub activity: &'static [Activity],
    pub quick_actions: &'static [QuickAction],
}

impl DashboardModel {
    pub fn for_user(user: &User) -> Self {
        Self { profile: Profile::from(user), stats: &STATS, activity: &RECENT_ACTIVITY, quick_actions: &QUICK_ACTIONS }
    }
}

/// What the dashboard route shows for a given auth snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    /// No user; a redirect to `/login` is underway.
    Hidden,
    Ready(DashboardModel),
}

/// Dashboard-route controller, independent of any renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardController {
    guard: RedirectGuard,
}

impl DashboardController {
    pub fn redirect_target(state: &AuthState) -> Option<Route> {
        matches!(state.phase(), AuthPhase::Unauthenticated).then_some(Route::Login)
    }

    pub fn view(state: &AuthState) -> DashboardView {
        match state.phase() {
            AuthPhase::Loading => DashboardView::Loading,
            AuthPhase::Unauthenticated => DashboardView::Hidden,
            AuthPhase::Authenticated(user) => DashboardView::Ready(DashboardModel::for_user(user)),
        }
    }

    /// Evaluate one render pass: redirect if needed, then return the view.
    pub fn render<P, N>(&mut self, auth: &P, navigator: &N) -> DashboardView
    where
        P: AuthProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        let state = auth.snapshot();
        self.guard.apply(Self::redirect_target(&state), navigator);
        Self::view(&state)
    }

    pub fn logout<P: AuthProvider + ?Sized>(auth: &P) {
        auth.logout();
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<AuthStore>();
    install_redirect(auth, use_navigate(), DashboardController::redirect_target);

    let on_logout = Callback::new(move |()| DashboardController::logout(&store));

    move || match DashboardController::view(&auth.get()) {
        DashboardView::Loading => view! { <LoadingSpinner/> }.into_any(),
        DashboardView::Hidden => ().into_any(),
        DashboardView::Ready(model) => view! { <DashboardContent model=model on_logout=on_logout/> }.into_any(),
    }
}

#[component]
fn DashboardContent(model: DashboardModel, on_logout: Callback<()>) -> impl IntoView {
    let DashboardModel { profile, stats, activity, quick_actions } = model;

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div class="dashboard-page__identity">
                    <Avatar initials={profile.initials}/>
                    <div>
                        <h2 class="dashboard-page__name">{profile.name}</h2>
                        <p class="dashboard-page__email">{profile.email}</p>
                    </div>
                </div>
                <button class="btn btn--outline dashboard-page__logout" on:click=move |_| on_logout.run(())>
                    <Icon name="log-out"/>
                    "Sign out"
                </button>
            </header>

            <main class="dashboard-page__main">
                <h1 class="dashboard-page__title">"Dashboard"</h1>
                <p class="dashboard-page__subtitle">"Welcome back! Here's what's happening today."</p>

                <div class="dashboard-page__stats">
                    {stats.iter().map(|stat| view! { <StatCard stat={*stat}/> }).collect::<Vec<_>>()}
                </div>

                <div class="dashboard-page__panels">
                    <section class="card">
                        <div class="card__header">
                            <h3 class="card__title">
                                <Icon name="clock"/>
                                "Recent Activity"
                            </h3>
                            <p class="card__description">"Latest updates from your account"</p>
                        </div>
                        <div class="card__content dashboard-page__activity">
                            {activity.iter().map(|entry| view! { <ActivityRow activity={*entry}/> }).collect::<Vec<_>>()}
                        </div>
                    </section>

                    <section class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Quick Actions"</h3>
                            <p class="card__description">"Common tasks and shortcuts"</p>
                        </div>
                        <div class="card__content dashboard-page__quick-actions">
                            {quick_actions
                                .iter()
                                .map(|action| {
                                    view! {
                                        <button class="btn btn--outline dashboard-page__quick-action" type="button">
                                            <Icon name={action.icon}/>
                                            {action.label}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </div>
            </main>
        </div>
    }
}
