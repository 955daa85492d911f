//! Service layer error types
//!
//! Transport errors are folded into what the screens need: a server message
//! to show verbatim when there is one, otherwise the caller's fallback.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Request failed to send or no response arrived
    #[error("Request error: {0}")]
    Request(String),

    /// Server rejected the request
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    ServerError {
        status: u16,
        message: Option<String>,
    },

    /// Failed to encode the request or parse the response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::RequestFailed(msg) => ServiceError::Request(msg),
            ApiError::HttpError { status, message } => ServiceError::ServerError { status, message },
            ApiError::ParseError(msg) | ApiError::SerializeError(msg) => {
                ServiceError::ParseError(msg)
            }
        }
    }
}

impl ServiceError {
    /// Message to show the user: the server's own reason if it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::ServerError {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::ServerError { status: 404, .. })
    }

    /// Check if this is an authorization error
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ServiceError::ServerError {
                status: 401 | 403,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ServiceError::from(ApiError::http(400, "Title already exists"));
        assert_eq!(err.user_message("Failed to save"), "Title already exists");
    }

    #[test]
    fn transport_errors_use_the_fallback() {
        let err = ServiceError::from(ApiError::RequestFailed("connection refused".into()));
        assert_eq!(err.user_message("Failed to save"), "Failed to save");

        let blank = ServiceError::ServerError {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Failed to save"), "Failed to save");
    }

    #[test]
    fn status_helpers() {
        assert!(ServiceError::from(ApiError::http(404, "nope")).is_not_found());
        assert!(ServiceError::from(ApiError::http(401, "nope")).is_unauthorized());
        assert!(!ServiceError::ParseError("x".into()).is_not_found());
    }
}
