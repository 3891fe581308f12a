//! Ownership-claim endpoints, including the admin adjudication actions.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use super::error::ApiError;
use super::http;
use super::types::{Claim, ClaimPayload, ClaimStatus};

fn claim_path(claim_id: i64) -> String {
    format!("/claims/{claim_id}")
}

fn list_path(status: Option<ClaimStatus>) -> String {
    match status {
        Some(status) => format!("/claims/?status={}", status.as_str()),
        None => "/claims/".to_owned(),
    }
}

/// List claims via `GET /claims/`, optionally filtered by status.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn list(status: Option<ClaimStatus>) -> Result<Vec<Claim>, ApiError> {
    http::get_json(&list_path(status)).await
}

/// Fetch one claim via `GET /claims/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn get(claim_id: i64) -> Result<Claim, ApiError> {
    http::get_json(&claim_path(claim_id)).await
}

/// Submit a claim via `POST /claims/`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn create(payload: &ClaimPayload) -> Result<Claim, ApiError> {
    http::post_json("/claims/", payload).await
}

/// Edit a pending claim's text via `PUT /claims/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn update(claim_id: i64, payload: &ClaimPayload) -> Result<Claim, ApiError> {
    http::put_json(&claim_path(claim_id), payload).await
}

/// Approve a claim via `POST /claims/{id}/approve`. Admin only,
/// enforced server-side.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn approve(claim_id: i64) -> Result<Claim, ApiError> {
    http::post_empty(&format!("/claims/{claim_id}/approve")).await
}

/// Reject a claim via `POST /claims/{id}/reject`. Admin only,
/// enforced server-side.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn reject(claim_id: i64) -> Result<Claim, ApiError> {
    http::post_empty(&format!("/claims/{claim_id}/reject")).await
}

/// Withdraw a claim via `DELETE /claims/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn remove(claim_id: i64) -> Result<(), ApiError> {
    http::delete(&claim_path(claim_id)).await
}
