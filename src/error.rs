//! API Error Taxonomy

use thiserror::Error;

/// Errors surfaced by the HTTP pipeline and endpoint wrappers
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// 401: invalid or expired credential; triggers the global logout path
    #[error("Not authenticated")]
    Unauthorized,
    /// 404: entity absent server-side
    #[error("Resource not found")]
    NotFound,
    /// Any other non-success status, with the envelope message when present
    #[error("Request failed ({status}): {message}")]
    Api { status: u16, message: String },
    /// Transport-level failure (offline, DNS, CORS)
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not match the expected envelope shape
    #[error("Invalid response: {0}")]
    Decode(String),
}
