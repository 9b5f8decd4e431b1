use crate::core::capabilities::{KeyValueStore, StoreError};
use directories::ProjectDirs;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// In-memory store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a TOML table of strings, written through on every set.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default per-user data location.
    pub fn open_default() -> Result<FileStore, StoreError> {
        let path = Self::default_path().ok_or_else(|| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Failed to determine data directory",
            ))
        })?;
        Ok(Self::open(path))
    }

    /// Open a store file. A missing or corrupt file starts empty.
    pub fn open(path: PathBuf) -> FileStore {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring unreadable state file");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        FileStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "termfolio", "termfolio")
            .map(|dirs| dirs.data_dir().join("state.toml"))
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents =
            toml::to_string_pretty(&self.values).map_err(|e| StoreError::Encode(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").is_none());
        store.set("k", "v".into()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut store = FileStore::open(path.clone());
        store.set("termfolio.theme", "\"matrix\"".into()).unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(path);
        assert_eq!(
            reopened.get("termfolio.theme").as_deref(),
            Some("\"matrix\"")
        );
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        let store = FileStore::open(path);
        assert!(store.get("anything").is_none());
    }
}
