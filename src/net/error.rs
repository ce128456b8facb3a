//! Error taxonomy for HTTP and stream failures.
//!
//! ERROR HANDLING
//! ==============
//! Transport-level failures (`Transport`, `Status`, `Decode`) are logged and
//! absorbed by the next natural cycle. `Rejected` means the server answered
//! with `success: false` and is the only variant surfaced to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ActionResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The server reported `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The subscription could not be opened.
    #[error("stream open failed: {0}")]
    Open(String),

    /// The subscription errored after opening.
    #[error("stream transport failed: {0}")]
    Transport(String),

    /// The server closed the subscription before the response completed.
    #[error("stream closed before completion")]
    Closed,
}

const REJECTED_FALLBACK: &str = "Request failed";

/// Turn `success: false` into `ApiError::Rejected`, preferring the server's
/// `message`, then `error`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the response reports failure.
pub fn check_success(resp: ActionResponse) -> Result<ActionResponse, ApiError> {
    if resp.success {
        return Ok(resp);
    }
    let reason = resp
        .message
        .filter(|m| !m.trim().is_empty())
        .or(resp.error)
        .unwrap_or_else(|| REJECTED_FALLBACK.to_owned());
    Err(ApiError::Rejected(reason))
}
