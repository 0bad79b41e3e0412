use super::*;

// =============================================================
// validate_sign_in
// =============================================================

#[test]
fn validate_sign_in_trims_email_but_not_password() {
    assert_eq!(
        validate_sign_in("  a@x.com ", " p1 "),
        Ok(SignInRequest { email: "a@x.com".to_owned(), password: " p1 ".to_owned() })
    );
}

#[test]
fn validate_sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("   ", "p1"), Err(TextKey::ErrSignIn));
    assert_eq!(validate_sign_in("a@x.com", ""), Err(TextKey::ErrSignIn));
}

// =============================================================
// validate_sign_up
// =============================================================

#[test]
fn validate_sign_up_builds_request() {
    assert_eq!(
        validate_sign_up(" alice ", "a@x.com", "p1", "p1"),
        Ok(SignUpRequest {
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            password: "p1".to_owned(),
        })
    );
}

#[test]
fn validate_sign_up_rejects_password_mismatch() {
    assert_eq!(validate_sign_up("alice", "a@x.com", "p1", "p2"), Err(TextKey::ErrPasswordMismatch));
}

#[test]
fn validate_sign_up_requires_fields_before_comparing_passwords() {
    assert_eq!(validate_sign_up("", "a@x.com", "p1", "p2"), Err(TextKey::ErrSignUp));
    assert_eq!(validate_sign_up("alice", " ", "p1", "p1"), Err(TextKey::ErrSignUp));
    assert_eq!(validate_sign_up("alice", "a@x.com", "", ""), Err(TextKey::ErrSignUp));
}

// =============================================================
// submit_label
// =============================================================

#[test]
fn submit_label_switches_while_busy() {
    assert_eq!(submit_label(false, TextKey::BtnSignIn, TextKey::BtnSigningIn), TextKey::BtnSignIn);
    assert_eq!(submit_label(true, TextKey::BtnSignUp, TextKey::BtnSigningUp), TextKey::BtnSigningUp);
}

#[test]
fn auth_tab_defaults_to_sign_in() {
    assert_eq!(AuthTab::default(), AuthTab::SignIn);
}
