use super::*;

#[test]
fn route_paths_are_literal() {
    assert_eq!(Route::Landing.path(), "/");
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Register.path(), "/register");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
}

#[test]
fn route_display_matches_path() {
    assert_eq!(Route::Dashboard.to_string(), "/dashboard");
}
