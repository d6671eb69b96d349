//! Sign-in route. The credential form belongs to the external auth backend;
//! this page only hands the visitor over to it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_redirect, signed_in_redirect};
use crate::util::route::Route;

/// Login page. Signed-in users are sent to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, use_navigate(), signed_in_redirect);

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="card__title">"Sign In"</h1>
                <p class="card__description">"Continue with your account provider to reach your dashboard."</p>
                <a href="/auth/login" rel="external" class="btn btn--primary">
                    "Continue"
                </a>
                <p class="auth-card__alt">
                    "New here? "
                    <a href={Route::Register.path()}>"Create an account"</a>
                </p>
                <a href={Route::Landing.path()} class="auth-card__back">"Back"</a>
            </div>
        </div>
    }
}
