//! HTTP plumbing shared by every REST module.
//!
//! SYSTEM CONTEXT
//! ==============
//! All outgoing requests are built here, which makes this the single
//! interception point for authorization: when the token store holds a
//! credential it is attached as `Authorization: Bearer <token>`, otherwise
//! the request goes out unmodified. Call sites never supply credentials
//! manually and there is no per-request opt-out.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::unavailable`] since the
//! API is only reachable from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::token;

/// Default API origin when no build-time override is supplied.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the remote API, from the `LOSTFOUND_API_URL` build env.
pub fn api_base() -> &'static str {
    option_env!("LOSTFOUND_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Absolute URL for a server path like `/auth/me`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// `Authorization` header value for the given credential, if any.
///
/// Pure core of the request authorizer: token present means exactly one
/// bearer header, token absent means none.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Render query pairs as `?k=v&…`, percent-encoded; empty for no pairs.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Render an `application/x-www-form-urlencoded` body.
pub fn form_body(pairs: &[(&str, String)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    encoded.join("&")
}

/// Attach the stored credential to an outgoing request.
///
/// The only mutation is adding the header; requests are never
/// short-circuited or cancelled here.
#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match authorization_header(token::load().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a JSON resource.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// POST a JSON body, decoding a JSON response.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// POST with an empty body, decoding a JSON response. Used by action
/// endpoints like claim approval.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// POST an `application/x-www-form-urlencoded` body.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    pairs: &[(&str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_body(pairs))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pairs;
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// POST browser `FormData` (multipart), decoding a JSON response. The
/// browser supplies the multipart boundary header itself.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
#[cfg(feature = "hydrate")]
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// PUT a JSON body, decoding a JSON response.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// PUT with no body, decoding a JSON response. Used by query-parameterized
/// transitions like report status updates.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::put(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// DELETE a resource, ignoring any response body.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-success status.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}
