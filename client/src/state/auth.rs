//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page applies each request outcome through the transitions below,
//! then renders from the resulting state. The session itself lives in the
//! server's cookie; `signed_in` only mirrors the last successful outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::i18n::{Locale, TextKey, translate};
use crate::net::error::AuthError;
use crate::net::types::{LogoutResponse, SignInResponse, UserResponse};

/// Which request a notice belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOp {
    SignUp,
    SignIn,
    Logout,
}

impl AuthOp {
    fn success_key(self) -> TextKey {
        match self {
            Self::SignUp => TextKey::SuccSignUp,
            Self::SignIn => TextKey::SuccSignIn,
            Self::Logout => TextKey::SuccLogout,
        }
    }

    fn error_key(self) -> TextKey {
        match self {
            Self::SignUp => TextKey::ErrSignUp,
            Self::SignIn => TextKey::ErrSignIn,
            Self::Logout => TextKey::ErrLogout,
        }
    }
}

/// One-line status shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(AuthOp),
    /// Rejected before sending (e.g. password mismatch).
    Invalid(TextKey),
    /// The request failed; `message` is the error text, possibly empty.
    Failed { op: AuthOp, message: String },
}

impl Notice {
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Success(_))
    }

    /// Render for `locale`. Server-provided messages are shown verbatim;
    /// an empty one falls back to the operation's generic error text.
    #[must_use]
    pub fn text(&self, locale: Locale) -> String {
        match self {
            Self::Success(op) => translate(locale, op.success_key()).to_owned(),
            Self::Invalid(key) => translate(locale, *key).to_owned(),
            Self::Failed { op, message } if message.trim().is_empty() => {
                translate(locale, op.error_key()).to_owned()
            }
            Self::Failed { message, .. } => message.clone(),
        }
    }
}

/// Authentication state tracking the current user and request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Account returned by the last successful sign-up.
    pub user: Option<UserResponse>,
    pub signed_in: bool,
    /// A request is in flight; forms are disabled.
    pub busy: bool,
    pub notice: Option<Notice>,
}

impl AuthState {
    /// Mark a request as started.
    pub fn begin(&mut self) {
        self.busy = true;
        self.notice = None;
    }

    /// Reject input locally without sending anything.
    pub fn reject(&mut self, key: TextKey) {
        self.busy = false;
        self.notice = Some(Notice::Invalid(key));
    }

    pub fn finish_sign_up(&mut self, result: Result<UserResponse, AuthError>) {
        self.busy = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.notice = Some(Notice::Success(AuthOp::SignUp));
            }
            Err(e) => self.fail(AuthOp::SignUp, &e),
        }
    }

    pub fn finish_sign_in(&mut self, result: Result<SignInResponse, AuthError>) {
        self.busy = false;
        match result {
            Ok(_) => {
                self.signed_in = true;
                self.notice = Some(Notice::Success(AuthOp::SignIn));
            }
            Err(e) => self.fail(AuthOp::SignIn, &e),
        }
    }

    pub fn finish_logout(&mut self, result: Result<LogoutResponse, AuthError>) {
        self.busy = false;
        match result {
            Ok(_) => {
                self.user = None;
                self.signed_in = false;
                self.notice = Some(Notice::Success(AuthOp::Logout));
            }
            Err(e) => self.fail(AuthOp::Logout, &e),
        }
    }

    fn fail(&mut self, op: AuthOp, err: &AuthError) {
        self.notice = Some(Notice::Failed { op, message: err.message() });
    }
}
