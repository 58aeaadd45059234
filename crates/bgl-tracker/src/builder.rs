//! Fluent builder for constructing a [`BackgroundTracker`].

use bgl_cache::RegionCoordinateCache;
use bgl_core::RegionConfig;
use bgl_platform::LocationPlatform;

use crate::{BackgroundTracker, RingListener, TrackerConfig, TrackerResult};

/// Fluent builder for [`BackgroundTracker<P, C>`].
///
/// # Required inputs
///
/// - `P: LocationPlatform` — the platform the tracker commands
/// - `C: RegionCoordinateCache` — where ring members are persisted
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                         |
/// |---------------------------|---------------------------------|
/// | `.config(c)`              | `TrackerConfig::default()`      |
/// | `.region(r)`              | 20 regions of 100 m             |
/// | `.namespace(ns)`          | `"bgloc"`                       |
/// | `.min_displacement_m(d)`  | `0.0` (exact equality)          |
/// | `.ring_listener(l)`       | none                            |
///
/// The namespace must match the one the cache was created with, or
/// crossings will not resolve.
///
/// # Example
///
/// ```rust,ignore
/// let cache = KeyValueRegionCache::new(JsonFileStore::open(path)?, "bgloc");
/// let mut tracker = TrackerBuilder::new(platform, cache)
///     .region(RegionConfig::new(150.0, 24))
///     .ring_listener(|ring: &Ring| draw(ring))
///     .build()?;
/// tracker.start_background(|update| println!("{update:?}"));
/// ```
pub struct TrackerBuilder<P: LocationPlatform, C: RegionCoordinateCache> {
    platform:      P,
    cache:         C,
    config:        TrackerConfig,
    ring_listener: Option<Box<dyn RingListener>>,
}

impl<P: LocationPlatform, C: RegionCoordinateCache> TrackerBuilder<P, C> {
    pub fn new(platform: P, cache: C) -> Self {
        Self {
            platform,
            cache,
            config:        TrackerConfig::default(),
            ring_listener: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn region(mut self, region: RegionConfig) -> Self {
        self.config.region = region;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    pub fn background_task_name(mut self, name: impl Into<String>) -> Self {
        self.config.background_task_name = name.into();
        self
    }

    pub fn min_displacement_m(mut self, metres: f64) -> Self {
        self.config.min_displacement_m = metres;
        self
    }

    pub fn ring_listener(mut self, listener: impl RingListener + 'static) -> Self {
        self.ring_listener = Some(Box::new(listener));
        self
    }

    /// Validate the configuration and build an idle tracker.
    pub fn build(self) -> TrackerResult<BackgroundTracker<P, C>> {
        let mut tracker = BackgroundTracker::new(self.platform, self.cache, self.config)?;
        if let Some(listener) = self.ring_listener {
            tracker.set_ring_listener(listener);
        }
        Ok(tracker)
    }
}
