//! Outbound ports - Interfaces for external services
//!
//! Infrastructure adapters implement these; application services and the UI
//! only ever see the traits.

pub mod api_port;
pub mod auth_port;
pub mod platform;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use auth_port::AuthPort;
pub use platform::{storage_keys, StorageProvider};
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use auth_port::MockAuthPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
