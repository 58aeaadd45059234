//! Geofence regions and ring geometry configuration.

use std::f64::consts::{PI, TAU};

use crate::{CoreError, CoreResult, Coordinate};

/// A circular region submitted to the platform for monitoring.
///
/// The identifier is the only thing the platform hands back when the region
/// is crossed, which is why region centers are persisted separately.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeofenceRegion {
    pub identifier: String,
    pub center:     Coordinate,
    pub radius_m:   f64,
}

impl GeofenceRegion {
    pub fn new(identifier: impl Into<String>, center: Coordinate, radius_m: f64) -> Self {
        Self { identifier: identifier.into(), center, radius_m }
    }

    /// `true` if `point` lies inside (or on) the circle.
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.center.distance_m(point) <= self.radius_m
    }
}

/// Identifier of ring member `index` under `namespace`.
///
/// The same set of indexed identifiers is reused by every ring, so the
/// persisted cache never holds more than `ring_size` entries.
pub fn region_identifier(namespace: &str, index: usize) -> String {
    format!("{namespace}.regionIdentifier.{index}")
}

/// Ring geometry.
///
/// `ring_size` regions of radius `region_radius_m` are placed on a circle of
/// radius [`ring_distance_m`](Self::ring_distance_m) around the last accepted
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegionConfig {
    /// Radius of each ring member, metres.  Default: 100.
    pub region_radius_m: f64,
    /// Number of regions in one ring.  Default: 20.
    pub ring_size: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self { region_radius_m: 100.0, ring_size: 20 }
    }
}

impl RegionConfig {
    pub fn new(region_radius_m: f64, ring_size: usize) -> Self {
        Self { region_radius_m, ring_size }
    }

    /// Distance from the ring center to each member's center:
    /// `region_radius_m · ring_size / π`.
    #[inline]
    pub fn ring_distance_m(&self) -> f64 {
        self.region_radius_m * self.ring_size as f64 / PI
    }

    /// Bearing of ring member `index`, radians: `index · 2π / ring_size`.
    #[inline]
    pub fn member_bearing(&self, index: usize) -> f64 {
        TAU / self.ring_size as f64 * index as f64
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.ring_size == 0 {
            return Err(CoreError::Config("ring_size must be at least 1".into()));
        }
        if !self.region_radius_m.is_finite() || self.region_radius_m <= 0.0 {
            return Err(CoreError::Config(format!(
                "region_radius_m must be a positive number, got {}",
                self.region_radius_m
            )));
        }
        Ok(())
    }
}
