//! JSON-file backend.
//!
//! The whole namespace is one JSON object of `key: number` pairs.  It is
//! read once on open and rewritten on every save through a sibling temp
//! file followed by a rename, so a crash mid-write leaves the previous
//! contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{CacheResult, KeyValueStore};

/// A durable store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path:   PathBuf,
    values: BTreeMap<String, f64>,
}

impl JsonFileStore {
    /// Open `path`, loading its contents if the file exists.  A missing file
    /// is an empty store; it is created on the first save.
    pub fn open(path: &Path) -> CacheResult<Self> {
        let values = match fs::read(path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "opened region cache file");
        Ok(Self { path: path.to_path_buf(), values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> CacheResult<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(&self.values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CacheResult<Option<f64>> {
        Ok(self.values.get(key).copied())
    }

    fn put_all(&mut self, entries: &[(String, f64)]) -> CacheResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        for (key, value) in entries {
            self.values.insert(key.clone(), *value);
        }
        self.flush()
    }
}
