use std::cell::RefCell;

use super::*;
use crate::net::types::User;
use crate::state::auth::AuthStore;

#[derive(Default)]
struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

impl RecordingNavigator {
    fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

fn ann() -> User {
    User::new("Ann Lee", "ann@x.com")
}

#[test]
fn signed_in_user_is_sent_to_dashboard() {
    let store = AuthStore::new(AuthState::signed_in(ann()));
    let nav = RecordingNavigator::default();
    let view = LandingController::default().render(&store, &nav);
    assert_eq!(view, LandingView::Redirecting);
    assert_eq!(nav.paths(), ["/dashboard"]);
}

#[test]
fn repeated_renders_with_same_user_navigate_once() {
    let store = AuthStore::new(AuthState::signed_in(ann()));
    let nav = RecordingNavigator::default();
    let mut controller = LandingController::default();
    for _ in 0..3 {
        controller.render(&store, &nav);
    }
    assert_eq!(nav.paths(), ["/dashboard"]);
}

#[test]
fn visitor_sees_content_and_no_navigation() {
    let store = AuthStore::new(AuthState::signed_out());
    let nav = RecordingNavigator::default();
    let view = LandingController::default().render(&store, &nav);
    assert_eq!(view, LandingView::Content(LandingModel::default()));
    assert!(nav.paths().is_empty());
}

#[test]
fn content_shown_while_session_lookup_pending() {
    let store = AuthStore::new(AuthState::pending());
    let nav = RecordingNavigator::default();
    assert!(matches!(LandingController::default().render(&store, &nav), LandingView::Content(_)));
    assert!(nav.paths().is_empty());
}

#[test]
fn user_arriving_after_lookup_triggers_redirect() {
    let store = AuthStore::new(AuthState::pending());
    let nav = RecordingNavigator::default();
    let mut controller = LandingController::default();
    controller.render(&store, &nav);
    store.resolve(Some(ann()));
    controller.render(&store, &nav);
    assert_eq!(nav.paths(), ["/dashboard"]);
}

#[test]
fn content_lists_three_features_and_two_action_groups() {
    let LandingView::Content(model) = LandingController::view(&AuthState::signed_out()) else {
        panic!("expected content");
    };
    assert_eq!(model.features.len(), 3);
    assert_eq!(model.hero_actions.len(), 2);
    assert_eq!(model.card_actions.len(), 2);
}

#[test]
fn activating_actions_navigates_to_their_routes() {
    let nav = RecordingNavigator::default();
    for action in &HERO_ACTIONS {
        LandingController::activate(action, &nav);
    }
    assert_eq!(nav.paths(), ["/login", "/register"]);
}
