//! Auth collaborator interfaces and shared redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page controllers never touch Leptos context or the router directly. They
//! read auth through `AuthProvider` and change routes through `Navigator`,
//! which lets the same controller run under the router (via
//! `RouterNavigator`) and under test fakes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::route::Route;

/// Source of the current authentication snapshot.
pub trait AuthProvider {
    fn current_user(&self) -> Option<User>;

    fn is_loading(&self) -> bool;

    /// End the current session. The resulting state change is what drives
    /// any redirect; callers must not navigate on their own.
    fn logout(&self);

    fn snapshot(&self) -> AuthState {
        AuthState { user: self.current_user(), loading: self.is_loading() }
    }
}

/// Fire-and-forget route changes.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// `Navigator` backed by the closure returned from `use_navigate()`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Deduplicates redirects across re-evaluations of the same auth state.
///
/// A redirect is issued only when the wanted target differs from the one
/// computed last time. Leaving a redirecting state resets the guard, so the
/// next transition back into it fires again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    last: Option<Route>,
}

impl RedirectGuard {
    /// Record `target` and return it if it should be acted on now.
    pub fn check(&mut self, target: Option<Route>) -> Option<Route> {
        if self.last == target {
            return None;
        }
        self.last = target;
        target
    }

    /// Run `check` and hand any resulting route to `navigator`.
    pub fn apply<N: Navigator + ?Sized>(&mut self, target: Option<Route>, navigator: &N) -> Option<Route> {
        let fired = self.check(target)?;
        log::debug!("redirecting to {fired}");
        navigator.navigate(fired.path());
        Some(fired)
    }
}

/// Send signed-in users on to the dashboard.
pub fn signed_in_redirect(state: &AuthState) -> Option<Route> {
    state.user.as_ref().map(|_| Route::Dashboard)
}

/// Redirect whenever `target` asks for it after an auth-signal change.
///
/// The effect only runs in the browser; SSR renders the pre-redirect view.
pub fn install_redirect<F>(auth: RwSignal<AuthState>, navigate: F, target: fn(&AuthState) -> Option<Route>)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigator = RouterNavigator::new(navigate);
    let guard = StoredValue::new(RedirectGuard::default());
    Effect::new(move || {
        let wanted = target(&auth.get());
        guard.update_value(|g| {
            g.apply(wanted, &navigator);
        });
    });
}
