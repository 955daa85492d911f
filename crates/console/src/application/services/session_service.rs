//! Session Service - access token storage behind the auth port

use std::sync::{Arc, RwLock};

use crate::ports::outbound::{storage_keys, AuthPort, StorageProvider};

/// Holds the bearer token in memory and mirrors it into persistent storage.
#[derive(Clone)]
pub struct SessionService<S: StorageProvider> {
    storage: S,
    token: Arc<RwLock<Option<String>>>,
}

impl<S: StorageProvider> SessionService<S> {
    /// Restores a previously stored token, if any.
    pub fn new(storage: S) -> Self {
        let token = storage
            .load(storage_keys::ACCESS_TOKEN)
            .filter(|t| !t.trim().is_empty());
        if token.is_some() {
            tracing::debug!("Restored access token from storage");
        }
        Self {
            storage,
            token: Arc::new(RwLock::new(token)),
        }
    }

    fn set(&self, value: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl<S: StorageProvider> AuthPort for SessionService<S> {
    fn get_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn sign_in(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            tracing::warn!("Ignoring empty access token");
            return;
        }
        self.storage.save(storage_keys::ACCESS_TOKEN, token);
        self.set(Some(token.to_string()));
        tracing::info!("Signed in");
    }

    fn logout(&self) {
        self.storage.remove(storage_keys::ACCESS_TOKEN);
        self.set(None);
        tracing::info!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;

    #[test]
    fn sign_in_persists_and_logout_clears() {
        let storage = MemoryStorageProvider::default();
        let session = SessionService::new(storage.clone());
        assert!(!session.is_signed_in());

        session.sign_in("  tok-1 ");
        assert_eq!(session.get_token().as_deref(), Some("tok-1"));
        assert_eq!(
            storage.load(storage_keys::ACCESS_TOKEN).as_deref(),
            Some("tok-1")
        );

        session.logout();
        assert_eq!(session.get_token(), None);
        assert_eq!(storage.load(storage_keys::ACCESS_TOKEN), None);
    }

    #[test]
    fn token_is_restored_from_storage() {
        let storage = MemoryStorageProvider::default();
        storage.save(storage_keys::ACCESS_TOKEN, "kept");
        let session = SessionService::new(storage);
        assert_eq!(session.get_token().as_deref(), Some("kept"));
    }

    #[test]
    fn blank_token_is_ignored() {
        let session = SessionService::new(MemoryStorageProvider::default());
        session.sign_in("   ");
        assert!(!session.is_signed_in());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn demo_token_does_not_outlive_the_demo_run() {
        use crate::application::ConsoleConfig;
        use crate::infrastructure::platform::{open_session, DesktopStorageProvider, DEMO_TOKEN};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let demo = ConsoleConfig {
            demo: true,
            ..ConsoleConfig::default()
        };
        let demo_session = open_session(&demo, DesktopStorageProvider::at(&path));
        assert_eq!(demo_session.get_token().as_deref(), Some(DEMO_TOKEN));

        let next_run = open_session(&ConsoleConfig::default(), DesktopStorageProvider::at(&path));
        assert_eq!(next_run.get_token(), None);
        assert!(!next_run.is_signed_in());
    }

    #[test]
    fn configured_token_is_persisted_outside_demo_mode() {
        use crate::application::ConsoleConfig;
        use crate::infrastructure::platform::open_session;

        let storage = MemoryStorageProvider::default();
        let config = ConsoleConfig {
            api_token: Some("tok-env".to_string()),
            ..ConsoleConfig::default()
        };
        let session = open_session(&config, storage.clone());

        assert_eq!(session.get_token().as_deref(), Some("tok-env"));
        assert_eq!(
            storage.load(storage_keys::ACCESS_TOKEN).as_deref(),
            Some("tok-env")
        );
    }
}
