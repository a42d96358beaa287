//! Error types for the lending client

use thiserror::Error;

use crate::models::session::Scope;

/// Default message when a failed envelope carries no usable `msg`
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Default message when the response body cannot be understood
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Failed to parse response";

/// Default message reported when the backend rejects a session token
pub const SESSION_EXPIRED_MESSAGE: &str = "Login expired, please sign in again";

/// Main client error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Non-2xx HTTP status
    #[error("{message}")]
    Transport { status: u16, message: String },

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Body missing or not a valid envelope, or payload of the wrong shape
    #[error("{0}")]
    MalformedResponse(String),

    /// Envelope parsed but its business code is not the success code
    #[error("{message}")]
    Business { code: i64, message: String },

    /// HTTP 401: the owning session has been terminated
    #[error("{message}")]
    SessionExpired { scope: Scope, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the error came from an HTTP 401 and the caller should send
    /// the user back to the login surface of [`AppError::expired_scope`].
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::SessionExpired { .. })
    }

    /// Scope whose session was terminated, if this is an expiry error
    pub fn expired_scope(&self) -> Option<Scope> {
        match self {
            AppError::SessionExpired { scope, .. } => Some(*scope),
            _ => None,
        }
    }

    /// Transport class failures: non-2xx responses and requests that never
    /// got a response
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport { .. } | AppError::Network(_))
    }

    /// HTTP status attached to the failure, when there was a response
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Transport { status, .. } => Some(*status),
            AppError::SessionExpired { .. } => Some(401),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization failed: {}", error))
    }
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
