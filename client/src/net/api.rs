//! HTTP client for the `/auth` endpoints: sign up, sign in, logout.
//!
//! Client-side (hydrate): `gloo-net` fetch with credentials included, so the
//! browser cookie jar carries the session.
//! Native (SSR host, CLI, tests): `reqwest` with a cookie store owned by the
//! [`AuthClient`]; clones share it.
//!
//! ERROR HANDLING
//! ==============
//! Classification depends only on the HTTP status. 2xx bodies decode into the
//! operation's payload; anything else decodes as `{"error": ...}` and surfaces
//! as [`AuthError`]. No retries and no timeouts; callers wrap their own.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::AuthError;
use super::types::{ErrorResponse, LogoutResponse, SignInRequest, SignInResponse, SignUpRequest, UserResponse};

/// Base endpoint used when no build-time override is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8040/auth";

const SIGNUP_PATH: &str = "/signup";
const SIGNIN_PATH: &str = "/signin";
const LOGOUT_PATH: &str = "/logout";

/// Base endpoint baked in at build time via `AUTHGATE_BASE_URL`, or the default.
#[must_use]
pub fn configured_base_url() -> &'static str {
    option_env!("AUTHGATE_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Turn a status code and raw body into the declared payload or an error.
///
/// # Errors
///
/// Non-2xx yields [`AuthError::ServerReported`] when the body is an
/// `ErrorResponse`, otherwise [`AuthError::UnreadableServerError`]. A 2xx body
/// that does not decode as `T` yields [`AuthError::Decode`].
pub fn classify_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AuthError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()));
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => Err(AuthError::ServerReported { status, message: error }),
        Err(_) => Err(AuthError::UnreadableServerError { status }),
    }
}

/// Status and body of a completed round trip, before classification.
struct RawResponse {
    status: u16,
    body: String,
}

/// Handle for the auth endpoints under one base URL.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    #[cfg(not(feature = "hydrate"))]
    http: reqwest::Client,
}

impl AuthClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8040/auth`).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the native HTTP client cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        #[cfg(not(feature = "hydrate"))]
        {
            let http = reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(Self { base_url, http })
        }
        #[cfg(feature = "hydrate")]
        {
            Ok(Self { base_url })
        }
    }

    /// Create a client for [`configured_base_url`].
    ///
    /// # Errors
    ///
    /// See [`AuthClient::new`].
    pub fn configured() -> Result<Self, AuthError> {
        Self::new(configured_base_url())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a new account via `POST {base}/signup`.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the server's `error` text arrives as
    /// [`AuthError::ServerReported`].
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<UserResponse, AuthError> {
        self.call(SIGNUP_PATH, Some(request)).await
    }

    /// Start a session via `POST {base}/signin`.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`].
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, AuthError> {
        self.call(SIGNIN_PATH, Some(request)).await
    }

    /// End the session via `POST {base}/logout` (no request body).
    ///
    /// # Errors
    ///
    /// Any [`AuthError`].
    pub async fn logout(&self) -> Result<LogoutResponse, AuthError> {
        self.call::<(), _>(LOGOUT_PATH, None).await
    }

    async fn call<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result = match self.post(path, body).await {
            Ok(raw) => classify_response(raw.status, &raw.body),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::warn!("auth request {path} failed: {e}");
        }
        result
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<RawResponse, AuthError>
    where
        B: Serialize + ?Sized,
    {
        let url = endpoint(&self.base_url, path);
        log::debug!("POST {url}");
        let mut req = self.http.post(&url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }

    #[cfg(feature = "hydrate")]
    async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<RawResponse, AuthError>
    where
        B: Serialize + ?Sized,
    {
        let url = endpoint(&self.base_url, path);
        log::debug!("POST {url}");
        let builder = gloo_net::http::Request::post(&url).credentials(web_sys::RequestCredentials::Include);
        let req = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| AuthError::Transport(e.to_string()))?;
        let resp = req.send().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
