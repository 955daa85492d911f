//! Desktop storage with file-based persistence

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::ports::outbound::StorageProvider;

/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/mediadmin/storage.json
/// - macOS: ~/Library/Application Support/io.mediadmin.mediadmin/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\mediadmin\mediadmin\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Opens the storage file in the platform config directory.
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("io", "mediadmin", "mediadmin") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            None => PathBuf::from("mediadmin_storage.json"),
        };
        Self::at(storage_path)
    }

    /// Opens (or later creates) the storage file at `path`.
    pub fn at(path: impl AsRef<Path>) -> Self {
        let storage_path = path.as_ref().to_path_buf();
        let cache = load_file(&storage_path);
        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);
        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let data = match self.cache.read() {
            Ok(guard) => serde_json::to_string_pretty(&*guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match data {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage data: {}", e),
        }
    }
}

fn load_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse storage file: {}", e);
            HashMap::new()
        }),
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}
