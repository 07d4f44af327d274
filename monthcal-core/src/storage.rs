//! Key-value persistence for the event store.
//!
//! The store only needs two things from its backing medium: read the previous value of a
//! key, and overwrite it. `FileStorage` keeps one JSON file per key in a directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CalResult;

/// Flat, synchronous key-value slot.
pub trait KeyValueStore {
    /// The value last written under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> CalResult<Option<String>>;

    /// Overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> CalResult<()>;
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> CalResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed storage: key `k` lives in `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> CalResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_storage_creates_directory_on_write() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let mut storage = FileStorage::new(&dir);

        assert_eq!(storage.get("calendarEvents").unwrap(), None);
        storage.set("calendarEvents", "{}").unwrap();

        assert!(dir.join("calendarEvents.json").exists());
        assert_eq!(storage.get("calendarEvents").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_keys_are_independent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path());
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }
}
