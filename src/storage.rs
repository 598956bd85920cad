//! Persisted key-value storage for the cart.
//!
//! The storefront keeps its cart in a single well-known key that is
//! overwritten wholesale on every mutation. The backend is injected so
//! the cart manager can be tested without touching the filesystem.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key-value storage backend.
///
/// `load` returns the raw stored text, or `None` when the key has never
/// been written. `save` replaces the stored value unconditionally; there
/// are no partial writes and no schema versioning.
pub trait StorageBackend {
    /// Reads the raw value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given data directory.
    ///
    /// The directory is created lazily on the first save.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Gets the platform-specific default data directory.
    ///
    /// - Linux: `~/.config/LazyShop/data/`
    /// - macOS: `~/Library/Application Support/LazyShop/data/`
    /// - Windows: `%APPDATA%\LazyShop\data\`
    pub fn default_data_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(crate::constants::APP_NAME)
            .join("data");
        Ok(dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read store file: {}", path.display()))?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context(format!(
            "Failed to create data directory: {}",
            self.data_dir.display()
        ))?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        // Temp file + rename keeps the stored value intact if the write fails
        fs::write(&temp_path, value).context(format!(
            "Failed to write temp store file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp store file to: {}",
            path.display()
        ))?;

        Ok(())
    }
}

/// In-memory storage backend used in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single key/value pair.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.into(), value.into());
        store
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_load_absent_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.load("cart").unwrap(), None);
    }

    #[test]
    fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.save("cart", "[]").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.save("cart", "first").unwrap();
        store.save("cart", "second").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_file_store_creates_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::new(nested.clone());

        store.save("cart", "[]").unwrap();
        assert!(nested.join("cart.json").exists());
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.save("cart", "[]").unwrap();
        assert!(!temp_dir.path().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load("cart").unwrap(), None);

        store.save("cart", "[]").unwrap();
        assert_eq!(store.load("cart").unwrap(), Some("[]".to_string()));
    }
}
