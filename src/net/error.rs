//! Error taxonomy for the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Every network call resolves to `Result<T, ApiError>`; nothing in this
//! crate panics on a failed request. The server reports failures as JSON
//! `{"detail": "..."}` payloads, which are surfaced verbatim so users see
//! the server's reason text. Anything else falls back to a generic
//! status-coded message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded as the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a response status and raw body,
    /// extracting the server's `detail` text when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: extract_detail(body).unwrap_or_else(|| fallback_detail(status)),
        }
    }

    /// Stub error for code paths that only exist in the browser.
    pub fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Pull the `detail` string out of a FastAPI-style error payload.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToOwned::to_owned)
}

fn fallback_detail(status: u16) -> String {
    format!("request failed: {status}")
}
