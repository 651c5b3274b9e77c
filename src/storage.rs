//! Key-value persistence surface.
//!
//! Values are plain strings (JSON documents in practice) addressed by short
//! keys. The file-backed store keeps one file per key inside an origin
//! directory; the in-memory store backs tests and is the fallback when that
//! directory cannot be created.

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    {
        bail!("invalid storage key {key:?}");
    }
    Ok(())
}

/// One `<key>.json` file per entry under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create storage dir {}", root.display()))?;
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        // Entries are replaced atomically through a temp file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bible-reader-store-{tag}-{}", std::process::id()))
    }

    #[test]
    fn file_store_round_trips_values() {
        let dir = scratch_dir("roundtrip");
        let store = FileStore::open(&dir).expect("open store");
        assert_eq!(store.get("theme").expect("get"), None);

        store.set("theme", "\"dark\"").expect("set");
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("\"dark\""));

        store.set("theme", "\"light\"").expect("overwrite");
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("\"light\""));

        store.remove("theme").expect("remove");
        store.remove("theme").expect("removing twice is fine");
        assert_eq!(store.get("theme").expect("get"), None);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = scratch_dir("reopen");
        FileStore::open(&dir)
            .expect("open store")
            .set("last_read", "{}")
            .expect("set");
        let reopened = FileStore::open(&dir).expect("reopen store");
        assert_eq!(reopened.get("last_read").expect("get").as_deref(), Some("{}"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let store = MemoryStore::new();
        assert!(store.set("../theme", "x").is_err());
        assert!(store.get("").is_err());
        assert!(store.remove("a/b").is_err());
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("font_size", "\"1.2\"").expect("set");
        assert_eq!(other.get("font_size").expect("get").as_deref(), Some("\"1.2\""));
    }
}
