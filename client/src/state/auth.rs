//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single source of truth for who is signed in. It knows
//! nothing about Leptos: views observe it through `subscribe`, and the root
//! component mirrors every change into an `RwSignal<AuthState>` so route
//! components re-render reactively.
//!
//! DESIGN
//! ======
//! Listeners run synchronously after each change, in subscription order,
//! with the store unlocked so a listener may read the store again. A write
//! that leaves the snapshot unchanged notifies nobody.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, RwLock};

use crate::net::types::User;
use crate::util::auth::AuthProvider;

/// Authentication snapshot: the current user and whether it is still being
/// resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial browser state before the session lookup completes.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AuthPhase<'_> {
        match (&self.user, self.loading) {
            (_, true) => AuthPhase::Loading,
            (None, false) => AuthPhase::Unauthenticated,
            (Some(user), false) => AuthPhase::Authenticated(user),
        }
    }
}

/// The three states route guards distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase<'a> {
    /// Still resolving; `user` is ignored.
    Loading,
    Unauthenticated,
    Authenticated(&'a User),
}

/// Handle returned by `AuthStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

struct Inner {
    state: AuthState,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Observable auth store shared through context.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<RwLock<Inner>>,
}

impl AuthStore {
    pub fn new(initial: AuthState) -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { state: initial, next_id: 0, listeners: Vec::new() })) }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> AuthState {
        self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner).state.clone()
    }

    /// Register `listener` for every subsequent change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Finish the session lookup with its outcome.
    pub fn resolve(&self, user: Option<User>) {
        self.update(|s| {
            s.user = user;
            s.loading = false;
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let (state, listeners) = {
            let mut inner = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
            let before = inner.state.clone();
            f(&mut inner.state);
            if inner.state == before {
                return;
            }
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new(AuthState::default())
    }
}

impl AuthProvider for AuthStore {
    fn current_user(&self) -> Option<User> {
        self.snapshot().user
    }

    fn is_loading(&self) -> bool {
        self.snapshot().loading
    }

    fn snapshot(&self) -> AuthState {
        AuthStore::snapshot(self)
    }

    fn logout(&self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout());
        log::info!("signing out");
        self.update(|s| {
            s.user = None;
            s.loading = false;
        });
    }
}
