//! Typed REST port
//!
//! `ApiPort` is generic over request/response types, which keeps call sites
//! free of `serde_json::Value` but makes the trait unusable behind `dyn`.
//! Adapters implement the object-safe [`super::RawApiPort`] instead and the
//! application layer wraps it (see `application::api::Api`).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors produced at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received (connection refused, timeout, DNS...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    HttpError {
        status: u16,
        /// Human readable reason extracted from the response body, if any
        message: Option<String>,
    },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn put_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_server_message() {
        assert_eq!(
            ApiError::http(422, "Title is taken").to_string(),
            "HTTP 422: Title is taken"
        );
        assert_eq!(
            ApiError::HttpError {
                status: 500,
                message: None
            }
            .to_string(),
            "HTTP 500"
        );
    }

    #[test]
    fn status_is_only_known_for_http_errors() {
        assert_eq!(ApiError::http(404, "gone").status(), Some(404));
        assert_eq!(ApiError::RequestFailed("offline".into()).status(), None);
    }
}
