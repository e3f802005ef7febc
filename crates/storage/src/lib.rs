use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use shared::domain::Role;
use thiserror::Error;
use tracing::{debug, warn};

/// Key holding the JSON-encoded submission list.
pub const SUBMISSIONS_KEY: &str = "eims_submissions";

/// Key holding the remembered credential for `role`.
pub fn credential_key(role: Role) -> String {
    format!("{}_pass", role.code())
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode storage document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("storage document '{path}' is not a JSON object of strings: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string key-value storage, the local equivalent of browser storage.
pub trait KeyValueStore: Send {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_string(&mut self, key: &str, value: String) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Non-durable store, used for tests and when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys kept in one JSON object file, rewritten on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens `path`, creating parent directories. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        ensure_parent_dir_exists(&path)?;

        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened json storage");
        Ok(Self { path, entries })
    }

    /// Like [`JsonFileStore::open`], but an undecodable file is moved aside to
    /// `<name>.corrupt` and an empty store is returned along with the backup path.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> StorageResult<(Self, Option<PathBuf>)> {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => Ok((store, None)),
            Err(StorageError::Decode { source, .. }) => {
                let backup = corrupt_backup_path(&path);
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %source,
                    "storage file is unreadable; moving it aside and starting empty"
                );
                fs::rename(&path, &backup).map_err(|source| StorageError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok((
                    Self {
                        path,
                        entries: BTreeMap::new(),
                    },
                    Some(backup),
                ))
            }
            Err(err) => Err(err),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StorageResult<()> {
        let serialized = serde_json::to_string_pretty(&self.entries).map_err(StorageError::Encode)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp storage file");
            }
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> StorageResult<()> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // Keep the cache in step with what is on disk.
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> StorageResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| StorageError::Io {
        path: parent.to_path_buf(),
        source,
    })
}

fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
