//! Raw API Port - Object-safe HTTP boundary
//!
//! The UI composition root stores one implementation behind `Arc<dyn RawApiPort>`:
//! the reqwest adapter against a live backend, or the in-memory backend in demo
//! mode and tests.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
