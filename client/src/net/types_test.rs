use super::*;

#[test]
fn user_deserializes_from_auth_me_payload() {
    let user: User = serde_json::from_str(r#"{"name":"Ann Lee","email":"ann@x.com"}"#).unwrap();
    assert_eq!(user, User::new("Ann Lee", "ann@x.com"));
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"Ann","email":"ann@x.com","avatar_url":null}"#).unwrap();
    assert_eq!(user.name, "Ann");
}

#[test]
fn user_missing_email_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"name":"Ann"}"#).is_err());
}
