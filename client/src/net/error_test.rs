use super::*;

#[test]
fn server_reported_displays_message_verbatim() {
    let err = AuthError::ServerReported { status: 401, message: "invalid credentials".to_owned() };
    assert_eq!(err.message(), "invalid credentials");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("invalid credentials"));
}

#[test]
fn unreadable_server_error_has_generic_message() {
    let err = AuthError::UnreadableServerError { status: 502 };
    assert_eq!(err.message(), "unknown error (HTTP 502)");
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.server_message(), None);
}

#[test]
fn transport_and_decode_have_no_status() {
    let transport = AuthError::Transport("connection refused".to_owned());
    let decode = AuthError::Decode("missing field `id`".to_owned());
    assert_eq!(transport.status(), None);
    assert_eq!(decode.status(), None);
    assert_eq!(transport.message(), "request failed: connection refused");
    assert_eq!(decode.message(), "invalid response body: missing field `id`");
}
