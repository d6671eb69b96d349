//! Public landing page with sign-in and sign-up calls to action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/`. A visitor who is already signed in is sent on to the
//! dashboard; everyone else sees static marketing content.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feature_card::FeatureCard;
use crate::components::icon::Icon;
use crate::state::auth::AuthState;
use crate::state::landing::{CARD_ACTIONS, FEATURES, Feature, HERO_ACTIONS, NavAction};
use crate::util::auth::{AuthProvider, Navigator, RedirectGuard, RouterNavigator, install_redirect, signed_in_redirect};
use crate::util::route::Route;

/// What the landing route shows for a given auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingView {
    /// A user is present; nothing is drawn while navigation happens.
    Redirecting,
    Content(LandingModel),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingModel {
    pub features: &'static [Feature],
    pub hero_actions: &'static [NavAction],
    pub card_actions: &'static [NavAction],
}

impl Default for LandingModel {
    fn default() -> Self {
        Self { features: &FEATURES, hero_actions: &HERO_ACTIONS, card_actions: &CARD_ACTIONS }
    }
}

/// Landing-route controller, independent of any renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LandingController {
    guard: RedirectGuard,
}

impl LandingController {
    pub fn redirect_target(state: &AuthState) -> Option<Route> {
        signed_in_redirect(state)
    }

    pub fn view(state: &AuthState) -> LandingView {
        if state.user.is_some() { LandingView::Redirecting } else { LandingView::Content(LandingModel::default()) }
    }

    /// Evaluate one render pass: redirect if needed, then return the view.
    pub fn render<P, N>(&mut self, auth: &P, navigator: &N) -> LandingView
    where
        P: AuthProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        let state = auth.snapshot();
        self.guard.apply(Self::redirect_target(&state), navigator);
        Self::view(&state)
    }

    /// Follow a call-to-action button.
    pub fn activate<N: Navigator + ?Sized>(action: &NavAction, navigator: &N) {
        navigator.navigate(action.route.path());
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, use_navigate(), LandingController::redirect_target);

    move || match LandingController::view(&auth.get()) {
        LandingView::Redirecting => ().into_any(),
        LandingView::Content(model) => view! { <LandingContent model=model/> }.into_any(),
    }
}

#[component]
fn LandingContent(model: LandingModel) -> impl IntoView {
    let navigator = RouterNavigator::new(use_navigate());

    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1 class="landing-page__title">"Welcome to Your App"</h1>
                <p class="landing-page__lede">
                    "Experience a modern authentication system with beautiful modal designs. "
                    "Get started by signing in or creating a new account."
                </p>
                <div class="landing-page__actions">
                    {nav_buttons(model.hero_actions, &navigator)}
                </div>
            </section>

            <section class="landing-page__features">
                {model.features.iter().map(|feature| view! { <FeatureCard feature={*feature}/> }).collect::<Vec<_>>()}
            </section>

            <section class="card landing-page__cta">
                <div class="card__header">
                    <Icon name="layout-dashboard" class="landing-page__cta-icon"/>
                    <h2 class="card__title">"Ready to get started?"</h2>
                    <p class="card__description">
                        "Create an account or sign in to access your personalized dashboard"
                    </p>
                </div>
                <div class="card__content landing-page__cta-actions">
                    {nav_buttons(model.card_actions, &navigator)}
                </div>
            </section>
        </div>
    }
}

fn nav_buttons<N>(actions: &'static [NavAction], navigator: &N) -> impl IntoView + use<N>
where
    N: Navigator + Clone + 'static,
{
    actions
        .iter()
        .map(|action| {
            let navigator = navigator.clone();
            view! {
                <button class={action.emphasis.class()} on:click=move |_| LandingController::activate(action, &navigator)>
                    <Icon name={action.icon}/>
                    {action.label}
                </button>
            }
        })
        .collect::<Vec<_>>()
}
