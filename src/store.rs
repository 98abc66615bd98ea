//! Key-value settings store: the persistence surface behind presets and the
//! active configuration.
//!
//! The engine reads and writes whole string blobs under string keys and
//! flushes explicitly; everything richer (JSON encoding, key layout) lives in
//! the preset store. Two implementations: a JSON file under the platform
//! config dir for the real application, and an in-memory map for tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::constants::storage;
use crate::error::PersistError;

/// The persistence surface consumed by the preset store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    /// Flush all entries to the backing medium.
    fn save(&mut self) -> Result<(), PersistError>;
}

/// Settings store backed by a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(storage::APP_DIR);
        path.push(storage::FILENAME);
        path
    }

    /// Open the store at `path`, reading existing entries.
    ///
    /// A missing file starts an empty store; an unreadable or corrupt file
    /// also starts empty, so a damaged settings file never prevents startup.
    /// The damaged content stays on disk until the next flush overwrites it.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => {
                    info!(path = %path.display(), count = entries.len(), "loaded settings store");
                    entries
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "settings store is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no settings store found, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn save(&mut self) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| PersistError::Encode { source })?;
        fs::write(&self.path, contents).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), count = self.entries.len(), "saved settings store");
        Ok(())
    }
}

/// In-memory settings store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn save(&mut self) -> Result<(), PersistError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = FileStore::open(path.clone());
        store.set("Preset_Labels", "{}".to_string());
        store.set("CustomPresetNames", r#"["Labels"]"#.to_string());
        store.save().unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get("Preset_Labels"), Some("{}".to_string()));
        assert_eq!(
            reopened.get("CustomPresetNames"),
            Some(r#"["Labels"]"#.to_string())
        );
        assert_eq!(reopened.get("missing"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = FileStore::open(path.clone());
        store.set("key", "value".to_string());
        store.save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_memory_store_set_remove() {
        let mut store = MemoryStore::new();
        store.set("key", "value".to_string());
        assert_eq!(store.get("key"), Some("value".to_string()));
        store.remove("key");
        assert_eq!(store.get("key"), None);
        store.save().unwrap();
    }
}
