//! Platform abstraction ports
//!
//! Storage differs between desktop (a JSON file) and the browser
//! (`localStorage`); application code only sees this trait.

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + Send + Sync + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
pub mod storage_keys {
    pub const ACCESS_TOKEN: &str = "mediadmin_access_token";
}
