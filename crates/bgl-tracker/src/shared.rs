//! A thread-safe handle around a tracker.

use std::sync::Arc;

use bgl_cache::RegionCoordinateCache;
use bgl_core::Fix;
use bgl_platform::{LocationPlatform, PlatformEvent};
use parking_lot::Mutex;

use crate::{BackgroundTracker, TrackerState, TrackingListener};

/// Cloneable handle that serializes every call onto one tracker.
///
/// Hosts whose platform callbacks arrive on several threads wrap the
/// tracker in this and call [`handle_event`](Self::handle_event) from each
/// of them; the lock guarantees events are applied one at a time.
pub struct SharedTracker<P: LocationPlatform, C: RegionCoordinateCache> {
    inner: Arc<Mutex<BackgroundTracker<P, C>>>,
}

impl<P: LocationPlatform, C: RegionCoordinateCache> Clone for SharedTracker<P, C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: LocationPlatform, C: RegionCoordinateCache> SharedTracker<P, C> {
    pub fn new(tracker: BackgroundTracker<P, C>) -> Self {
        Self { inner: Arc::new(Mutex::new(tracker)) }
    }

    pub fn start(&self, listener: impl TrackingListener + 'static) {
        self.inner.lock().start(listener);
    }

    pub fn start_background(&self, listener: impl TrackingListener + 'static) {
        self.inner.lock().start_background(listener);
    }

    pub fn stop(&self) {
        self.inner.lock().stop();
    }

    pub fn handle_event(&self, event: PlatformEvent) {
        self.inner.lock().handle_event(event);
    }

    pub fn state(&self) -> TrackerState {
        self.inner.lock().state()
    }

    pub fn last_fix(&self) -> Option<Fix> {
        self.inner.lock().last_fix()
    }

    /// Run `f` with exclusive access to the tracker.
    pub fn with<R>(&self, f: impl FnOnce(&mut BackgroundTracker<P, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
