//! Failure taxonomy for auth requests.
//!
//! Every operation in [`crate::net::api`] fails with exactly one
//! [`AuthError`]. The `Display` text of each variant is what the UI shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an auth request did not produce its success payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Non-2xx status with a well-formed `{"error": ...}` body.
    #[error("{message}")]
    ServerReported { status: u16, message: String },
    /// Non-2xx status whose body is not JSON or has no `error` string.
    #[error("unknown error (HTTP {status})")]
    UnreadableServerError { status: u16 },
    /// The request never produced a response (connection, DNS, build).
    #[error("request failed: {0}")]
    Transport(String),
    /// 2xx status whose body does not match the expected payload.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AuthError {
    /// Human-readable message for display.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerReported { status, .. } | Self::UnreadableServerError { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Message the server put in its error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerReported { message, .. } => Some(message),
            _ => None,
        }
    }
}
