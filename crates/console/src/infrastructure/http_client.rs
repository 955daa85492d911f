//! HTTP adapter - `RawApiPort` over reqwest
//!
//! Every request carries the current bearer token when one exists. Error
//! bodies are mined for a human readable reason so screens can show the
//! server's own message.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use crate::application::ConsoleConfig;
use crate::ports::outbound::{ApiError, AuthPort, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    config: ConsoleConfig,
    auth: Arc<dyn AuthPort>,
}

impl ApiAdapter {
    pub fn new(config: &ConsoleConfig, auth: Arc<dyn AuthPort>) -> Self {
        Self {
            client: build_client(config),
            config: config.clone(),
            auth,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.auth.get_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed");
            ApiError::RequestFailed(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Server rejected request");
        Err(ApiError::HttpError {
            status: status.as_u16(),
            message: extract_server_message(&body),
        })
    }

    async fn send_json(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        self.send(builder)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ConsoleConfig) -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
}

// The browser's fetch owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ConsoleConfig) -> Client {
    Client::new()
}

/// Pulls a displayable reason out of an error body.
///
/// Field-level validation errors (`{"errors": {"title": ["is required"]}}` or
/// `{"errors": ["..."]}`) become `"Validation failed: ..."`; otherwise a
/// top-level `message` string is used.
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    if let Some(errors) = value.get("errors") {
        let mut messages = Vec::new();
        collect_messages(errors, &mut messages);
        if !messages.is_empty() {
            return Some(format!("Validation failed: {}", messages.join(", ")));
        }
    }

    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|v| collect_messages(v, out)),
        Value::Object(map) => match map.get("msg").or_else(|| map.get("message")) {
            Some(inner) => collect_messages(inner, out),
            None => map.values().for_each(|v| collect_messages(v, out)),
        },
        _ => {}
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(%path, "GET");
        self.send_json(self.request(Method::GET, path)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(%path, "POST");
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        tracing::debug!(%path, "POST");
        self.send(self.request(Method::POST, path).json(body))
            .await
            .map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(%path, "PUT");
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        tracing::debug!(%path, "PUT");
        self.send(self.request(Method::PUT, path).json(body))
            .await
            .map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(%path, "DELETE");
        self.send(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockAuthPort;
    use reqwest::header::AUTHORIZATION;

    fn adapter(token: Option<&'static str>) -> ApiAdapter {
        let mut auth = MockAuthPort::new();
        auth.expect_get_token()
            .returning(move || token.map(str::to_string));
        let config = ConsoleConfig {
            api_url: "http://catalog.test/".into(),
            ..ConsoleConfig::default()
        };
        ApiAdapter::new(&config, Arc::new(auth))
    }

    #[test]
    fn bearer_header_is_sent_when_signed_in() {
        let request = adapter(Some("tok"))
            .request(Method::GET, "/api/songs?page=1&limit=10")
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://catalog.test/api/songs?page=1&limit=10"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn bearer_header_is_omitted_when_signed_out() {
        let request = adapter(None)
            .request(Method::DELETE, "/api/songs/1")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn message_field_is_extracted() {
        assert_eq!(
            extract_server_message(r#"{"message": "Category not found"}"#).as_deref(),
            Some("Category not found")
        );
    }

    #[test]
    fn field_errors_are_joined() {
        let body = r#"{"message": "ignored", "errors": {"title": ["Title is required"], "artist": ["Artist is too long"]}}"#;
        let message = extract_server_message(body).unwrap();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("Title is required"));
        assert!(message.contains("Artist is too long"));
    }

    #[test]
    fn express_validator_style_errors_are_supported() {
        let body = r#"{"errors": [{"msg": "Invalid value", "path": "title"}]}"#;
        assert_eq!(
            extract_server_message(body).as_deref(),
            Some("Validation failed: Invalid value")
        );
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert_eq!(extract_server_message("<html>502</html>"), None);
        assert_eq!(extract_server_message(r#"{"message": "  "}"#), None);
    }
}
