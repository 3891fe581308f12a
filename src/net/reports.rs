//! Lost/found report endpoints.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::error::ApiError;
use super::http;
use super::types::{Report, ReportPayload, ReportStatus, ReportType};

/// Server-side filters for the report list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub report_type: Option<ReportType>,
    pub status: Option<ReportStatus>,
}

impl ReportQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.report_type {
            pairs.push(("report_type", kind.as_str().to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        pairs
    }
}

fn status_path(report_id: i64, status: ReportStatus) -> String {
    format!("/reports/{report_id}/status?status={}", status.as_str())
}

/// List reports via `GET /reports/`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn list(query: &ReportQuery) -> Result<Vec<Report>, ApiError> {
    let path = format!("/reports/{}", http::query_string(&query.to_pairs()));
    http::get_json(&path).await
}

/// Fetch one report via `GET /reports/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn get(report_id: i64) -> Result<Report, ApiError> {
    http::get_json(&format!("/reports/{report_id}")).await
}

/// File a report via `POST /reports/`. The server creates or links the
/// item and seeds its status from the report type.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn create(payload: &ReportPayload) -> Result<Report, ApiError> {
    http::post_json("/reports/", payload).await
}

/// Transition a report via `PUT /reports/{id}/status`. Resolving a report
/// also completes its linked item server-side.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn update_status(report_id: i64, status: ReportStatus) -> Result<Report, ApiError> {
    http::put_empty(&status_path(report_id, status)).await
}
