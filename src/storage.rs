// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence for user preferences.
//!
//! Preferences are stored as plain strings so that every value
//! round-trips exactly through the store (`42` ↔ `"42"`, `true` ↔
//! `"true"`). The [`Store`] trait is the seam between the settings
//! logic and the storage backend: the application uses [`FileStore`]
//! (a TOML table in the config directory), tests and directory-less
//! environments use [`MemoryStore`].
//!
//! Writes are last-write-wins with no transactional guarantees.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SETTINGS_FILE: &str = "settings.toml";

/// Opaque synchronous key-value storage.
pub trait Store: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// TOML-file-backed store at `<dir>/settings.toml`.
///
/// The file is a flat table of string values. It is re-read on every
/// access; the settings layer already coalesces writes, so there is no
/// caching here.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given config directory.
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(SETTINGS_FILE),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let table = toml::from_str(&content)?;
        Ok(table)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_table() {
            Ok(table) => table.get(key).cloned(),
            Err(error) => {
                eprintln!("Failed to read settings file: {}", error);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than propagated; the current
        // write is the freshest state we have.
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and environments without a config directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.table
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.table
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_get_absent_key_returns_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("settings_volume"), None);
    }

    #[test]
    fn file_store_round_trips_string_values() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path());

        store.set("settings_volume", "42").expect("set failed");
        store.set("settings_muted", "true").expect("set failed");

        assert_eq!(store.get("settings_volume"), Some("42".to_string()));
        assert_eq!(store.get("settings_muted"), Some("true".to_string()));
    }

    #[test]
    fn file_store_overwrites_previous_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path());

        store.set("settings_volume", "10").expect("set failed");
        store.set("settings_volume", "85").expect("set failed");

        assert_eq!(store.get("settings_volume"), Some("85".to_string()));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");
        let store = FileStore::new(&nested);

        store.set("settings_muted", "false").expect("set failed");
        assert!(store.path().exists());
    }

    #[test]
    fn file_store_survives_unrelated_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path());

        store.set("settings_volume", "30").expect("set failed");
        store.set("other_key", "hello").expect("set failed");

        // Both keys persist independently
        assert_eq!(store.get("settings_volume"), Some("30".to_string()));
        assert_eq!(store.get("other_key"), Some("hello".to_string()));
    }

    #[test]
    fn corrupt_file_reads_as_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path());
        fs::write(store.path(), "not = valid = toml").expect("failed to write corrupt file");

        assert_eq!(store.get("settings_volume"), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("settings_muted"), None);

        store.set("settings_muted", "true").expect("set failed");
        assert_eq!(store.get("settings_muted"), Some("true".to_string()));
    }
}
