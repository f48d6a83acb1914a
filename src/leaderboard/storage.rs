//! Key-value storage capability behind the leaderboard.
//!
//! The leaderboard only needs `get`/`set` on byte values under a string key.
//! `MemoryStore` keeps them in process; `FileStore` keeps them in a single
//! file so they survive restarts.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage file is not a valid key-value map: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("failed to encode value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal durable key-value capability.
pub trait KeyValueStore {
    /// Bytes stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Single-file store.
///
/// The whole key-value map is bincode-encoded into one file. `set` writes a
/// sibling temp file and renames it over the original, so a crash mid-write
/// leaves the previous contents intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path for in-progress writes: the full file name plus `.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_map(&self) -> Result<BTreeMap<String, Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bincode::deserialize(&bytes)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, Vec<u8>>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = bincode::serialize(map)?;
        let tmp = self.temp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        // A corrupt file would otherwise block every future write.
        let mut map = self.read_map().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), %err, "discarding unreadable store file");
            BTreeMap::new()
        });
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}
