// src/store/file.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AppError;

use super::KeyValueStore;

const STORE_FILE: &str = "store.json";

/// Disk-backed store: one JSON object of key → value in `<dir>/store.json`.
///
/// The whole document is rewritten on every mutation through a temporary
/// file and a rename, so a crash leaves either the old or the new document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) the store under `dir`.
    ///
    /// An unreadable or corrupt document is logged and replaced by an empty
    /// one on the next write.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE);

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Store document {} is corrupt, starting empty: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let document = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Applies `change` and persists; the in-memory map is rolled back if
    /// the write fails.
    fn mutate(
        &self,
        key: &str,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> Option<String>,
    ) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let previous = change(&mut entries);

        if let Err(e) = self.persist(&entries) {
            match previous {
                Some(old) => entries.insert(key.to_owned(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.mutate(key, |entries| entries.insert(key.to_owned(), value.to_owned()))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.mutate(key, |entries| entries.remove(key))
    }
}
