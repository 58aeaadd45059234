//! `bgl-cache` — persistent region-identifier → coordinate cache.
//!
//! A geofence crossing only carries the region's identifier, and it may be
//! delivered to a freshly relaunched process.  The tracker therefore writes
//! every ring member's center to durable storage before submitting the ring
//! and reads it back on a crossing.
//!
//! Three storage backends are provided:
//!
//! | Backend          | Feature   | Durability                                  |
//! |------------------|-----------|---------------------------------------------|
//! | [`MemoryStore`]  | *(none)*  | process lifetime only                        |
//! | [`JsonFileStore`]| *(none)*  | one JSON object file, rewritten atomically   |
//! | `SqliteStore`    | `sqlite`  | single-table SQLite database (WAL)           |
//!
//! All of them implement [`KeyValueStore`] and are wrapped by
//! [`KeyValueRegionCache`], which owns the key layout:
//!
//! ```text
//! <ns>.region.coordinates.<id>.lat
//! <ns>.region.coordinates.<id>.long
//! <ns>.region.<id>.radius
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use bgl_cache::{JsonFileStore, KeyValueRegionCache, RegionCoordinateCache};
//!
//! let store = JsonFileStore::open(Path::new("./regions.json"))?;
//! let mut cache = KeyValueRegionCache::new(store, "bgloc");
//! cache.save(&ring.regions)?;
//! let center = cache.resolve("bgloc.regionIdentifier.0")?;
//! ```

pub mod cache;
pub mod error;
pub mod json;
pub mod keys;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use cache::{KeyValueRegionCache, RegionCoordinateCache};
pub use error::{CacheError, CacheResult};
pub use json::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
