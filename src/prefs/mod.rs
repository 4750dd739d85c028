//! Session preferences: a small file-backed key/value store and a
//! binding that keeps one value in memory with write-through
//! persistence.
//!
//! Durability is best-effort. A failed write is logged and swallowed;
//! the session continues with the in-memory value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Get/set of single string values by key.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// JSON map in a file under the user config directory.
///
/// The whole map is read on every get and rewritten on every set.
/// Writes are last-write-wins on a single key; no locking.
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<config dir>/hackerstories/prefs.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hackerstories").join("prefs.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(map) => map.get(key).cloned(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read preferences");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        // A corrupt file degrades to a fresh map rather than blocking writes.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// Binds one value to the store: read once at session start, write on
/// every subsequent change.
pub struct SessionPreference<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: PreferenceStore> SessionPreference<S> {
    /// Read the persisted value for `key`, or fall back without writing.
    pub fn initialize(store: S, key: &str, fallback: &str) -> Self {
        let value = store.get(key).unwrap_or_else(|| fallback.to_string());
        Self {
            store,
            key: key.to_string(),
            value,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Update the in-memory value and persist it, fire-and-forget.
    pub fn set(&mut self, value: String) {
        if value == self.value {
            return;
        }
        self.value = value;
        if let Err(err) = self.store.set(&self.key, &self.value) {
            tracing::warn!(key = %self.key, error = %err, "failed to persist preference");
        }
    }
}
