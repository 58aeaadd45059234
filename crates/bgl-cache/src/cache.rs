//! The `RegionCoordinateCache` trait and its key-value implementation.

use bgl_core::{Coordinate, GeofenceRegion};

use crate::keys::{lat_key, long_key, radius_key};
use crate::{CacheResult, KeyValueStore};

/// Maps geofence identifiers back to the coordinates they were placed at.
///
/// Entries are never evicted; the tracker reuses a fixed set of indexed
/// identifiers, so saving a new ring overwrites the previous one.
pub trait RegionCoordinateCache {
    /// Persist center and radius for every region in `regions`.
    fn save(&mut self, regions: &[GeofenceRegion]) -> CacheResult<()>;

    /// The last coordinate saved for `identifier`, or `None` if it was never
    /// saved.  Callers treat `None` as a soft failure.
    fn resolve(&self, identifier: &str) -> CacheResult<Option<Coordinate>>;
}

impl<C: RegionCoordinateCache + ?Sized> RegionCoordinateCache for Box<C> {
    fn save(&mut self, regions: &[GeofenceRegion]) -> CacheResult<()> {
        (**self).save(regions)
    }

    fn resolve(&self, identifier: &str) -> CacheResult<Option<Coordinate>> {
        (**self).resolve(identifier)
    }
}

/// [`RegionCoordinateCache`] over any [`KeyValueStore`], namespaced so that
/// several engines can share one store.
#[derive(Debug)]
pub struct KeyValueRegionCache<S: KeyValueStore> {
    store:     S,
    namespace: String,
}

impl<S: KeyValueStore> KeyValueRegionCache<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self { store, namespace: namespace.into() }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The radius last saved for `identifier`.
    pub fn radius(&self, identifier: &str) -> CacheResult<Option<f64>> {
        self.store.get(&radius_key(&self.namespace, identifier))
    }
}

impl<S: KeyValueStore> RegionCoordinateCache for KeyValueRegionCache<S> {
    fn save(&mut self, regions: &[GeofenceRegion]) -> CacheResult<()> {
        let ns = &self.namespace;
        let entries: Vec<(String, f64)> = regions
            .iter()
            .flat_map(|r| {
                [
                    (lat_key(ns, &r.identifier), r.center.lat),
                    (long_key(ns, &r.identifier), r.center.lon),
                    (radius_key(ns, &r.identifier), r.radius_m),
                ]
            })
            .collect();
        self.store.put_all(&entries)?;
        tracing::debug!(namespace = %ns, regions = regions.len(), "saved region coordinates");
        Ok(())
    }

    fn resolve(&self, identifier: &str) -> CacheResult<Option<Coordinate>> {
        let lat = self.store.get(&lat_key(&self.namespace, identifier))?;
        let lon = self.store.get(&long_key(&self.namespace, identifier))?;
        Ok(match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        })
    }
}
