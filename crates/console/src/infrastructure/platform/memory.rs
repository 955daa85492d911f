use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::StorageProvider;

/// Process-local storage; nothing survives a restart
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.values.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}
