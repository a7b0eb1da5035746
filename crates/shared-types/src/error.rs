use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of console errors.
///
/// The first group mirrors HTTP outcomes reported by the backend; the second
/// group covers failures that never produced a usable response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    ValidationError,
    InternalError,
    Network,
    Timeout,
    MalformedResponse,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Timeout => write!(f, "Timeout"),
            AppErrorKind::MalformedResponse => write!(f, "MalformedResponse"),
        }
    }
}

/// Structured error shared by the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Shown when nothing more specific is known about a failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Timeout, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::MalformedResponse, message)
    }

    /// Map an HTTP status code to an error kind.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            400..=499 => AppErrorKind::BadRequest,
            _ => AppErrorKind::InternalError,
        };
        Self::with_kind(kind, message)
    }

    /// True when the failure means the backend no longer recognises the session.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self.kind, AppErrorKind::Unauthorized)
    }

    /// True for failures where nothing reached (or came back from) the backend.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::Network | AppErrorKind::Timeout | AppErrorKind::MalformedResponse
        )
    }

    /// Message suitable for a toast or inline notice.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Unable to reach the server. Check your connection.".to_string(),
            AppErrorKind::Timeout => "The server took too long to respond.".to_string(),
            AppErrorKind::MalformedResponse => GENERIC_FAILURE_MESSAGE.to_string(),
            _ if self.message.trim().is_empty() => GENERIC_FAILURE_MESSAGE.to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the errors in the form.", field_errors)
    }
}
