//! Unit tests for bgl-cache.

use bgl_core::{Coordinate, GeofenceRegion};

fn two_regions() -> Vec<GeofenceRegion> {
    vec![
        GeofenceRegion::new("region1", Coordinate::new(1.2, 2.10), 10.0),
        GeofenceRegion::new("region2", Coordinate::new(10.1, 20.2), 30.0),
    ]
}

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::{KeyValueRegionCache, KeyValueStore, MemoryStore, RegionCoordinateCache};

    #[test]
    fn caches_both_regions() {
        let mut cache = KeyValueRegionCache::new(MemoryStore::new(), "test");
        let regions = two_regions();
        cache.save(&regions).unwrap();

        for r in &regions {
            assert_eq!(cache.resolve(&r.identifier).unwrap(), Some(r.center));
        }
        assert_eq!(cache.radius("region2").unwrap(), Some(30.0));
    }

    #[test]
    fn uses_documented_key_layout() {
        let mut cache = KeyValueRegionCache::new(MemoryStore::new(), "ns");
        cache.save(&two_regions()[..1]).unwrap();
        let store = cache.store();
        assert_eq!(store.get("ns.region.coordinates.region1.lat").unwrap(), Some(1.2));
        assert_eq!(store.get("ns.region.coordinates.region1.long").unwrap(), Some(2.10));
        assert_eq!(store.get("ns.region.region1.radius").unwrap(), Some(10.0));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let cache = KeyValueRegionCache::new(MemoryStore::new(), "ns");
        assert_eq!(cache.resolve("nope").unwrap(), None);
    }

    #[test]
    fn save_overwrites_same_identifier() {
        let mut cache = KeyValueRegionCache::new(MemoryStore::new(), "ns");
        cache.save(&[GeofenceRegion::new("r", Coordinate::new(1.0, 1.0), 5.0)]).unwrap();
        cache.save(&[GeofenceRegion::new("r", Coordinate::new(2.0, 3.0), 5.0)]).unwrap();
        assert_eq!(cache.resolve("r").unwrap(), Some(Coordinate::new(2.0, 3.0)));
        assert_eq!(cache.store().len(), 3);
    }

    #[test]
    fn namespaces_do_not_collide() {
        let mut a = KeyValueRegionCache::new(MemoryStore::new(), "a");
        a.save(&two_regions()).unwrap();
        let b = KeyValueRegionCache::new(a.into_store(), "b");
        assert_eq!(b.resolve("region1").unwrap(), None);
    }

    #[test]
    fn boxed_cache_delegates() {
        let mut cache: Box<dyn RegionCoordinateCache> =
            Box::new(KeyValueRegionCache::new(MemoryStore::new(), "ns"));
        cache.save(&two_regions()).unwrap();
        assert_eq!(cache.resolve("region1").unwrap(), Some(Coordinate::new(1.2, 2.10)));
    }
}

#[cfg(test)]
mod json_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{JsonFileStore, KeyValueRegionCache, RegionCoordinateCache};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tmp();
        let store = JsonFileStore::open(&dir.path().join("regions.json")).unwrap();
        let cache = KeyValueRegionCache::new(store, "ns");
        assert_eq!(cache.resolve("region1").unwrap(), None);
    }

    #[test]
    fn survives_reopen() {
        let dir = tmp();
        let path = dir.path().join("regions.json");
        {
            let store = JsonFileStore::open(&path).unwrap();
            let mut cache = KeyValueRegionCache::new(store, "ns");
            cache.save(&two_regions()).unwrap();
        }
        let reopened = KeyValueRegionCache::new(JsonFileStore::open(&path).unwrap(), "ns");
        assert_eq!(reopened.resolve("region2").unwrap(), Some(Coordinate::new(10.1, 20.2)));
        assert!(!dir.path().join("regions.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tmp();
        let path = dir.path().join("regions.json");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{KeyValueRegionCache, RegionCoordinateCache, SqliteStore};

    #[test]
    fn round_trip_in_memory() {
        let mut cache = KeyValueRegionCache::new(SqliteStore::open_in_memory().unwrap(), "ns");
        cache.save(&two_regions()).unwrap();
        assert_eq!(cache.resolve("region1").unwrap(), Some(Coordinate::new(1.2, 2.10)));
        assert_eq!(cache.radius("region1").unwrap(), Some(10.0));
    }

    #[test]
    fn survives_reopen() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.db");
        {
            let mut cache = KeyValueRegionCache::new(SqliteStore::open(&path).unwrap(), "ns");
            cache.save(&two_regions()).unwrap();
            cache.save(&[GeofenceRegion::new("region1", Coordinate::new(-5.0, 6.0), 10.0)]).unwrap();
        }
        let cache = KeyValueRegionCache::new(SqliteStore::open(&path).unwrap(), "ns");
        assert_eq!(cache.resolve("region1").unwrap(), Some(Coordinate::new(-5.0, 6.0)));

        let conn = rusqlite::Connection::open(&path).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM region_cache", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 6);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::{KeyValueRegionCache, MemoryStore, RegionCoordinateCache};

    proptest! {
        #[test]
        fn save_then_resolve_returns_center(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            radius in 1.0f64..10_000.0,
            id in "[a-z0-9.]{1,24}",
        ) {
            let mut cache = KeyValueRegionCache::new(MemoryStore::new(), "prop");
            let region = GeofenceRegion::new(id.clone(), Coordinate::new(lat, lon), radius);
            cache.save(&[region]).unwrap();
            let got = cache.resolve(&id).unwrap().unwrap();
            prop_assert!((got.lat - lat).abs() < 1e-12);
            prop_assert!((got.lon - lon).abs() < 1e-12);
        }
    }
}
