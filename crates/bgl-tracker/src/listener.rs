//! Application-facing callbacks.

use bgl_core::{Fix, LocationResult};

use crate::Ring;

/// Receives every fix the tracker accepts, and every failure it surfaces.
///
/// Any `FnMut(LocationResult<Fix>) + Send` closure is a listener.
pub trait TrackingListener: Send {
    fn on_update(&mut self, update: LocationResult<Fix>);
}

impl<F> TrackingListener for F
where
    F: FnMut(LocationResult<Fix>) + Send,
{
    fn on_update(&mut self, update: LocationResult<Fix>) {
        self(update)
    }
}

/// Notified each time a new ring is placed.  Meant for visualization only.
pub trait RingListener: Send {
    fn on_ring_changed(&mut self, ring: &Ring);
}

impl<F> RingListener for F
where
    F: FnMut(&Ring) + Send,
{
    fn on_ring_changed(&mut self, ring: &Ring) {
        self(ring)
    }
}
