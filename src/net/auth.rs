//! Authentication endpoints.
//!
//! DESIGN
//! ======
//! The login exchange is OAuth2 password-flow shaped: the server expects a
//! form-encoded `username` field even though the credential is a roll
//! number. Session state transitions live in `state::session`; this module
//! only speaks HTTP.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use super::error::ApiError;
use super::http;
use super::types::{RegisterRequest, TokenResponse, UserProfile};

fn login_form(roll_number: &str, password: &str) -> [(&'static str, String); 2] {
    [
        ("username", roll_number.to_owned()),
        ("password", password.to_owned()),
    ]
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying the server's reason text for
/// rejected credentials, or a transport-level [`ApiError`].
pub async fn login(roll_number: &str, password: &str) -> Result<TokenResponse, ApiError> {
    http::post_form("/auth/login", &login_form(roll_number, password)).await
}

/// Fetch the authenticated user from `GET /auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with status 401 for a missing, expired,
/// or otherwise rejected token.
pub async fn fetch_current_user() -> Result<UserProfile, ApiError> {
    http::get_json("/auth/me").await
}

/// Server acknowledgement for a completed registration.
#[derive(Debug, Deserialize)]
pub struct RegisterReply {
    pub message: String,
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the server's reason (e.g. duplicate
/// roll number), or a transport-level [`ApiError`].
pub async fn register(request: &RegisterRequest) -> Result<RegisterReply, ApiError> {
    http::post_json("/auth/register", request).await
}
