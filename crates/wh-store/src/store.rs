//! Key-value stores.
//!
//! A store maps a key to one UTF-8 text document. There are no
//! transactions: every call is a single synchronous round trip and the last
//! writer wins.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StoreResult};

/// Get/set access to text documents by key.
pub trait KeyValueStore {
    /// The document under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the document under `key`.
    fn set(&mut self, key: &str, text: &str) -> StoreResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(key, path = %path.display(), "read record");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, text: &str) -> StoreResult<()> {
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        let path = self.path_for(key);
        fs::write(&path, text).map_err(write_err)?;
        tracing::debug!(key, path = %path.display(), bytes = text.len(), "wrote record");
        Ok(())
    }
}

/// In-memory store. Can be switched to refuse all access.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    blocked: bool,
}

impl MemoryStore {
    /// An empty, working store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every call.
    pub fn blocked() -> Self {
        Self {
            entries: HashMap::new(),
            blocked: true,
        }
    }

    /// Make every following call fail (or work again).
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Raw access for inspection, bypassing the block.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check(&self) -> StoreResult<()> {
        if self.blocked {
            Err(StorageError::Unavailable("store is blocked".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, text: &str) -> StoreResult<()> {
        self.check()?;
        self.entries.insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert!(store.get("wfrp_wallet").unwrap().is_none());
    }

    #[test]
    fn file_store_creates_dir_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/data"));
        store.set("k", "{\"a\":1}").unwrap();
        assert!(dir.path().join("nested/data/k.json").exists());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn file_store_write_failure() {
        let dir = TempDir::new().unwrap();
        // A regular file where the directory should be.
        let blocker = dir.path().join("data");
        fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::new(&blocker);
        assert!(matches!(
            store.set("k", "v"),
            Err(StorageError::Write { .. })
        ));
    }

    #[test]
    fn memory_store_last_writer_wins() {
        let mut store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn blocked_memory_store_fails() {
        let mut store = MemoryStore::blocked();
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(store.set("k", "v").is_err());
        assert!(store.peek("k").is_none());
        store.set_blocked(false);
        store.set("k", "v").unwrap();
        assert_eq!(store.peek("k"), Some("v"));
    }
}
