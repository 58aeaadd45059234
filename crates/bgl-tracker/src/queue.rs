//! Channel plumbing for hosts that collect platform callbacks on other
//! threads.

use std::sync::mpsc;

use bgl_cache::RegionCoordinateCache;
use bgl_platform::{LocationPlatform, PlatformEvent};

use crate::{BackgroundTracker, SharedTracker};

/// Anything that consumes platform events one at a time.
pub trait EventSink {
    fn handle_event(&mut self, event: PlatformEvent);
}

impl<P: LocationPlatform, C: RegionCoordinateCache> EventSink for BackgroundTracker<P, C> {
    fn handle_event(&mut self, event: PlatformEvent) {
        BackgroundTracker::handle_event(self, event);
    }
}

impl<P: LocationPlatform, C: RegionCoordinateCache> EventSink for SharedTracker<P, C> {
    fn handle_event(&mut self, event: PlatformEvent) {
        SharedTracker::handle_event(self, event);
    }
}

/// Create a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventReceiver { rx })
}

/// Producer half.  Clone one per callback thread.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::Sender<PlatformEvent>,
}

impl EventSender {
    /// Queue `event`.  Returns `false` once the receiver has been dropped.
    pub fn send(&self, event: PlatformEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer half.  Events are handed to the sink in send order.
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::Receiver<PlatformEvent>,
}

impl EventReceiver {
    /// Apply every event already queued without blocking.  Returns how many
    /// were applied.
    pub fn pump(&self, sink: &mut impl EventSink) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            sink.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Block, applying events until every sender has been dropped.  Returns
    /// how many were applied.
    pub fn run(&self, sink: &mut impl EventSink) -> usize {
        let mut applied = 0;
        for event in self.rx.iter() {
            sink.handle_event(event);
            applied += 1;
        }
        tracing::debug!(applied, "event channel closed");
        applied
    }
}
