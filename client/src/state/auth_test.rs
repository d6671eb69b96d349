use std::sync::Mutex;

use super::*;

fn ann() -> User {
    User::new("Ann Lee", "ann@x.com")
}

fn recorder(store: &AuthStore) -> Arc<Mutex<Vec<AuthState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().unwrap().push(s.clone()));
    seen
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    assert_eq!(AuthState::pending().phase(), AuthPhase::Loading);
}

#[test]
fn loading_wins_over_present_user() {
    let state = AuthState { user: Some(ann()), loading: true };
    assert_eq!(state.phase(), AuthPhase::Loading);
}

#[test]
fn resolved_without_user_is_unauthenticated() {
    assert_eq!(AuthState::signed_out().phase(), AuthPhase::Unauthenticated);
}

#[test]
fn resolved_with_user_is_authenticated() {
    let state = AuthState::signed_in(ann());
    assert_eq!(state.phase(), AuthPhase::Authenticated(&ann()));
}

// =============================================================
// AuthStore
// =============================================================

#[test]
fn resolve_sets_user_and_clears_loading() {
    let store = AuthStore::new(AuthState::pending());
    store.resolve(Some(ann()));
    assert_eq!(store.snapshot(), AuthState::signed_in(ann()));
}

#[test]
fn subscribers_see_each_change_in_order() {
    let store = AuthStore::new(AuthState::pending());
    let seen = recorder(&store);
    store.resolve(Some(ann()));
    store.logout();
    assert_eq!(*seen.lock().unwrap(), vec![AuthState::signed_in(ann()), AuthState::signed_out()]);
}

#[test]
fn unchanged_write_does_not_notify() {
    let store = AuthStore::new(AuthState::signed_out());
    let seen = recorder(&store);
    store.resolve(None);
    store.set_loading(false);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = AuthStore::new(AuthState::pending());
    let seen = Arc::new(Mutex::new(0_usize));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);
    store.resolve(None);
    assert!(store.unsubscribe(id));
    store.resolve(Some(ann()));
    assert_eq!(*seen.lock().unwrap(), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn listener_may_read_store_during_notification() {
    let store = AuthStore::new(AuthState::pending());
    let reader = store.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.snapshot()));
    store.resolve(Some(ann()));
    assert_eq!(*seen.lock().unwrap(), Some(AuthState::signed_in(ann())));
}

#[test]
fn logout_clears_user_through_provider_interface() {
    let store = AuthStore::new(AuthState::signed_in(ann()));
    AuthProvider::logout(&store);
    assert!(store.current_user().is_none());
    assert!(!store.is_loading());
}

#[test]
fn clones_share_state() {
    let store = AuthStore::default();
    let other = store.clone();
    store.resolve(Some(ann()));
    assert_eq!(other.current_user(), Some(ann()));
}
