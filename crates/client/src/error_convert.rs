//! Conversions from transport failures and error responses into `AppError`.

use reqwest::{Response, StatusCode};
use shared_types::{AppError, ErrorBody};

/// Classify a `reqwest` failure.
pub fn from_reqwest(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::timeout(err.to_string())
    } else if err.is_decode() {
        AppError::malformed(err.to_string())
    } else if let Some(status) = err.status() {
        AppError::from_status(status.as_u16(), err.to_string())
    } else {
        AppError::network(err.to_string())
    }
}

/// Build an error from a non-success status and its (optional) JSON body.
///
/// Only the backend's own `message` is kept; without one the message stays
/// empty so callers can substitute their own wording.
pub fn from_error_body(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .unwrap_or_default();
    if message.is_empty() {
        tracing::debug!(status = status.as_u16(), "Error response without a message");
    }
    AppError::from_status(status.as_u16(), message)
}

/// Pass successful responses through; turn everything else into an error.
pub async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(from_error_body(status, &body))
}
