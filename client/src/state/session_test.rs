use super::*;
use session::UserIdentity;

#[test]
fn signed_in_label_uses_email_claim() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({"id": "u1", "email": "choi@example.com"})).unwrap();
    let session = Session { user: Some(user), loading: false };
    assert_eq!(signed_in_label(&session), "choi@example.com");
}

#[test]
fn signed_in_label_is_empty_without_user() {
    assert_eq!(signed_in_label(&Session::default()), "");
}
