use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  user@example.com  ", " secret "),
        Ok(("user@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both e-mail and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both e-mail and password."));
}

#[test]
fn validate_login_input_rejects_address_without_at() {
    assert_eq!(validate_login_input("user", "secret"), Err("Enter a valid e-mail address."));
}

#[test]
fn bad_credentials_get_a_friendly_message() {
    assert_eq!(sign_in_error_message(&BackendError::Status(400)), "Incorrect e-mail or password.");
    assert_eq!(sign_in_error_message(&BackendError::Status(401)), "Incorrect e-mail or password.");
}

#[test]
fn transport_and_other_failures_are_distinguished() {
    assert_eq!(
        sign_in_error_message(&BackendError::Request("offline".into())),
        "Could not reach the sign-in service."
    );
    assert_eq!(
        sign_in_error_message(&BackendError::Status(500)),
        "Sign-in failed: backend responded with status 500"
    );
}
