//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AuthState, AuthStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the `AuthStore`, mirrors it into an `RwSignal<AuthState>` for
/// reactive reads, and provides both through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AuthStore::new(AuthState::pending());
    let auth = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |state| auth.set(state.clone()));
    {
        let store = store.clone();
        on_cleanup(move || {
            store.unsubscribe(subscription);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            log::debug!("session lookup resolved (signed in: {})", user.is_some());
            store.resolve(user);
        });
    }

    provide_context(auth);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
