//! Platform-specific implementations
//!
//! The persistent storage backend is selected at compile time based on the
//! target architecture; [`MemoryStorageProvider`] is available everywhere.

use std::sync::Arc;

use crate::application::services::SessionService;
use crate::application::ConsoleConfig;
use crate::ports::outbound::{AuthPort, StorageProvider};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStorageProvider;

pub use memory::MemoryStorageProvider;

/// Persistent storage for the current target
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = DesktopStorageProvider;

/// Persistent storage for the current target
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = BrowserStorageProvider;

pub fn create_storage() -> PlatformStorage {
    PlatformStorage::default()
}

/// Token stand-in used when demo mode starts without one
pub const DEMO_TOKEN: &str = "demo";

/// Builds the session for one run of the console.
///
/// Demo mode signs in against process-local storage so its stand-in token
/// never lands in `persistent`.
pub fn open_session<S: StorageProvider>(
    config: &ConsoleConfig,
    persistent: S,
) -> Arc<dyn AuthPort> {
    if config.demo {
        let session = SessionService::new(MemoryStorageProvider::default());
        session.sign_in(config.api_token.as_deref().unwrap_or(DEMO_TOKEN));
        return Arc::new(session);
    }

    let session = SessionService::new(persistent);
    if let Some(token) = config.api_token.as_deref() {
        session.sign_in(token);
    }
    Arc::new(session)
}
