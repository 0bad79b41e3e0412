use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn sign_up_request_serializes_all_fields() {
    let req = SignUpRequest {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p1".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"username": "alice", "email": "a@x.com", "password": "p1"})
    );
}

#[test]
fn sign_in_request_serializes_email_and_password_only() {
    let req = SignInRequest { email: "a@x.com".to_owned(), password: "wrong".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@x.com", "password": "wrong"}));
}

#[test]
fn request_debug_redacts_password() {
    let up = SignUpRequest {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let inp = SignInRequest { email: "a@x.com".to_owned(), password: "hunter2".to_owned() };
    assert!(!format!("{up:?}").contains("hunter2"));
    assert!(!format!("{inp:?}").contains("hunter2"));
    assert!(format!("{inp:?}").contains("a@x.com"));
}

// =============================================================
// UserResponse
// =============================================================

#[test]
fn user_response_keeps_timestamps_as_strings() {
    let user: UserResponse = serde_json::from_str(
        r#"{"id":"1","username":"alice","email":"a@x.com","created_at":"01.01.2024 00:00:00","updated_at":"02.01.2024 13:45:10"}"#,
    )
    .unwrap();
    assert_eq!(user.created_at, "01.01.2024 00:00:00");
    assert_eq!(user.updated_at, "02.01.2024 13:45:10");
}

#[test]
fn user_response_ignores_unknown_fields() {
    let user: UserResponse = serde_json::from_str(
        r#"{"id":"7","username":"bob","email":"b@x.com","created_at":"x","updated_at":"y","role":"admin"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "7");
}

#[test]
fn user_response_requires_every_field() {
    let res = serde_json::from_str::<UserResponse>(r#"{"id":"1","username":"alice"}"#);
    assert!(res.is_err());
}

// =============================================================
// SignInResponse optional fields
// =============================================================

#[test]
fn sign_in_response_accepts_token_only() {
    let resp: SignInResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
    assert_eq!(resp.token.as_deref(), Some("t"));
    assert_eq!(resp.message, None);
}

#[test]
fn sign_in_response_accepts_message_only() {
    let resp: SignInResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert_eq!(resp.token, None);
    assert_eq!(resp.message.as_deref(), Some("ok"));
}

#[test]
fn sign_in_response_accepts_both_fields() {
    let resp: SignInResponse = serde_json::from_str(r#"{"token":"t","message":"ok"}"#).unwrap();
    assert_eq!(
        resp,
        SignInResponse { token: Some("t".to_owned()), message: Some("ok".to_owned()) }
    );
}

#[test]
fn sign_in_response_accepts_empty_object() {
    let resp: SignInResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, SignInResponse::default());
}

#[test]
fn sign_in_response_omits_absent_fields_when_serialized() {
    let resp = SignInResponse { token: None, message: Some("ok".to_owned()) };
    assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"message":"ok"}"#);
}

// =============================================================
// ErrorResponse / LogoutResponse
// =============================================================

#[test]
fn error_response_reads_error_field() {
    let err: ErrorResponse = serde_json::from_str(r#"{"error":"invalid credentials"}"#).unwrap();
    assert_eq!(err.error, "invalid credentials");
}

#[test]
fn logout_response_requires_message() {
    assert!(serde_json::from_str::<LogoutResponse>("{}").is_err());
    let resp: LogoutResponse = serde_json::from_str(r#"{"message":"bye"}"#).unwrap();
    assert_eq!(resp.message, "bye");
}
