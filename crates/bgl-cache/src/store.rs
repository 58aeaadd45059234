//! The `KeyValueStore` trait and the in-memory backend.

use std::collections::HashMap;

use crate::CacheResult;

/// A flat, durable string → number store.
///
/// There is no schema and no versioning: a write overwrites whatever value
/// the key held before.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> CacheResult<Option<f64>>;

    /// Write every entry.  Backends persist the whole batch before returning.
    fn put_all(&mut self, entries: &[(String, f64)]) -> CacheResult<()>;
}

/// A `HashMap`-backed store that lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CacheResult<Option<f64>> {
        Ok(self.values.get(key).copied())
    }

    fn put_all(&mut self, entries: &[(String, f64)]) -> CacheResult<()> {
        for (key, value) in entries {
            self.values.insert(key.clone(), *value);
        }
        Ok(())
    }
}
