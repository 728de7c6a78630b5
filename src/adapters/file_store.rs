//! JSON-file key-value store adapter.
//!
//! Persists every key in a single `store.json` object inside the data
//! directory (`~/.hubdeck` unless overridden).

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// Name of the data directory under the home directory.
pub const DATA_DIR: &str = ".hubdeck";

/// Name of the store file inside the data directory.
pub const STORE_FILE: &str = "store.json";

/// File-backed [`KeyValueStore`].
///
/// Each write rewrites the whole file. The mutex serializes writers within
/// the process; there is no cross-process locking.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Store whose file lives in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE),
            lock: Mutex::new(()),
        }
    }

    /// Default data directory, `~/.hubdeck`.
    pub fn default_data_dir() -> Result<PathBuf, StoreError> {
        dirs::home_dir()
            .map(|home| home.join(DATA_DIR))
            .ok_or(StoreError::NoDataDir)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the whole map. A missing file is an empty map; an unreadable
    /// or corrupt one is logged and treated as empty.
    fn read_all(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(err) => {
                tracing::warn!("Could not open {}: {}", self.path.display(), err);
                return BTreeMap::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("Ignoring corrupt store {}: {}", self.path.display(), err);
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)?;
        writer.flush().map_err(|e| self.io_error(e))
    }

    fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_all();
        if f(&mut map) {
            self.write_all(&map)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all().remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|map| map.remove(key).is_some())
    }
}
