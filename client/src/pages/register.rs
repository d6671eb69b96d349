//! Sign-up route, handing off to the external auth backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_redirect, signed_in_redirect};
use crate::util::route::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, use_navigate(), signed_in_redirect);

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="card__title">"Create Account"</h1>
                <p class="card__description">"Register with your account provider to get a personalized dashboard."</p>
                <a href="/auth/register" rel="external" class="btn btn--primary">
                    "Continue"
                </a>
                <p class="auth-card__alt">
                    "Already registered? "
                    <a href={Route::Login.path()}>"Sign in"</a>
                </p>
                <a href={Route::Landing.path()} class="auth-card__back">"Back"</a>
            </div>
        </div>
    }
}
