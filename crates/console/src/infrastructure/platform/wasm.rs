//! Browser storage backed by `window.localStorage`

use crate::ports::outbound::StorageProvider;

#[derive(Clone, Default)]
pub struct BrowserStorageProvider;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageProvider for BrowserStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!("Failed to write localStorage key {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove localStorage key {}", key);
            }
        }
    }
}
