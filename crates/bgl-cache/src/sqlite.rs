//! SQLite backend (feature `sqlite`).
//!
//! One table, `region_cache(key TEXT PRIMARY KEY, value REAL NOT NULL)`.
//! Each save is a single transaction of upserts.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::{CacheResult, KeyValueStore};

/// A durable store backed by an SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> CacheResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// A private in-memory database; useful in tests.
    pub fn open_in_memory() -> CacheResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> CacheResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS region_cache (
                 key   TEXT PRIMARY KEY,
                 value REAL NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> CacheResult<Option<f64>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM region_cache WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get::<_, f64>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_all(&mut self, entries: &[(String, f64)]) -> CacheResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO region_cache (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )?;
            for (key, value) in entries {
                stmt.execute(rusqlite::params![key, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
