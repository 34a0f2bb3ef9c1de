//! Synchronous string key-value backends.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;

/// A synchronous string-keyed get/set/remove interface.
///
/// `get` distinguishes an absent key (`Ok(None)`) from a backend failure.
pub trait KeyValueBackend {
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

fn backend_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Backend {
        key: key.to_string(),
        source,
    }
}

/// Stores each key as a file under a directory.
///
/// The directory is created on first write. Writes go to a sibling temp
/// file and are renamed into place, so readers never see a torn value.
/// Concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys become file names verbatim, so only non-empty `[A-Za-z0-9_-]`
    /// keys are accepted.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(backend_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| backend_error(key, e))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| backend_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| backend_error(key, e))?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(backend_error(key, e)),
        }
    }
}

/// Process-local backend, used in tests and when no data directory is wanted.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        key: &str,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| backend_error(key, std::io::Error::other("memory backend lock poisoned")))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_entries(key, |entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_entries(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.with_entries(key, |entries| {
            entries.remove(key);
        })
    }
}
