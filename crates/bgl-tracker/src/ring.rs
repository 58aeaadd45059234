//! Geofence ring geometry.

use bgl_core::{Coordinate, GeofenceRegion, RegionConfig, region_identifier};

/// A full set of geofence regions placed around one position.
///
/// Member `i` sits at bearing `i · 2π / ring_size` and distance
/// `ring_distance_m` from `center`.  Adjacent members overlap, so the
/// device cannot leave the ring without entering at least one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub center:  Coordinate,
    pub regions: Vec<GeofenceRegion>,
}

impl Ring {
    /// Compute the ring around `center`.
    pub fn around(center: Coordinate, config: &RegionConfig, namespace: &str) -> Self {
        let distance = config.ring_distance_m();
        let regions = (0..config.ring_size)
            .map(|i| {
                GeofenceRegion::new(
                    region_identifier(namespace, i),
                    center.destination(config.member_bearing(i), distance),
                    config.region_radius_m,
                )
            })
            .collect();
        Self { center, regions }
    }

    /// Centers of the ring members, in index order.
    pub fn member_coordinates(&self) -> Vec<Coordinate> {
        self.regions.iter().map(|r| r.center).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// `true` if `identifier` names a ring member under `namespace`.
    pub fn is_member_identifier(namespace: &str, identifier: &str) -> bool {
        identifier
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix(".regionIdentifier."))
            .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
    }
}
