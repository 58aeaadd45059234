//! The `LocationAcquirer`.

use bgl_core::{Fix, Heading, LocationError, LocationResult, RequestId, RequestIds};
use bgl_platform::{LocationPlatform, LocationSource, PlatformEvent};

/// How the current subscriber wants fixes delivered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// One precise fix per request, re-armed by significant-change wakes.
    OneShot,
    /// Every precise batch, plus heading re-forwards when `heading` is set.
    Continuous { heading: bool },
}

/// A fix (or failure) forwarded to the current subscriber.
#[derive(Clone, Debug, PartialEq)]
pub struct Acquisition {
    /// The subscription this acquisition belongs to.
    pub request: RequestId,
    pub mode:    AcquisitionMode,
    pub result:  LocationResult<Fix>,
}

#[derive(Copy, Clone, Debug)]
struct Subscription {
    id:   RequestId,
    mode: AcquisitionMode,
}

/// Wraps the platform's precise and significant-change capabilities.
///
/// The acquirer never calls back into its subscriber.  The owner feeds
/// platform events through [`handle_event`](Self::handle_event) and acts on
/// the returned [`Acquisition`].
#[derive(Debug, Default)]
pub struct LocationAcquirer {
    ids:                 RequestIds,
    active:              Option<Subscription>,
    significant_started: bool,
    last_fix:            Option<Fix>,
    last_heading:        Option<Heading>,
}

impl LocationAcquirer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to continuous precise updates.
    pub fn start_continuous<P: LocationPlatform + ?Sized>(
        &mut self,
        platform:     &mut P,
        with_heading: bool,
    ) -> RequestId {
        let mode = AcquisitionMode::Continuous { heading: with_heading };
        let id = self.subscribe(mode);
        platform.start_updates(with_heading);
        id
    }

    /// Request one fresh precise fix, making sure the significant-change
    /// wake signal is running first.
    pub fn request_one_shot<P: LocationPlatform + ?Sized>(&mut self, platform: &mut P) -> RequestId {
        let id = self.subscribe(AcquisitionMode::OneShot);
        self.ensure_significant_changes(platform);
        platform.request_one_fix();
        id
    }

    /// Stop continuous and heading updates and drop the subscriber.  The
    /// significant-change subscription stays up.
    pub fn stop<P: LocationPlatform + ?Sized>(&mut self, platform: &mut P) {
        platform.stop_updates();
        if let Some(sub) = self.active.take() {
            tracing::debug!(request = %sub.id, "acquisition stopped");
        }
    }

    /// The current subscription id, if any.
    pub fn active_request(&self) -> Option<RequestId> {
        self.active.map(|s| s.id)
    }

    /// The last fix forwarded to a subscriber.
    pub fn last_fix(&self) -> Option<Fix> {
        self.last_fix
    }

    pub fn significant_changes_started(&self) -> bool {
        self.significant_started
    }

    /// Dispatch a platform event.  Events unrelated to acquisition return
    /// `None`.
    pub fn handle_event<P: LocationPlatform + ?Sized>(
        &mut self,
        platform: &mut P,
        event:    &PlatformEvent,
    ) -> Option<Acquisition> {
        match event {
            PlatformEvent::Locations { source, fixes } => self.handle_locations(platform, *source, fixes),
            PlatformEvent::Heading(heading) => self.handle_heading(*heading),
            PlatformEvent::LocationFailed { source, reason } => self.handle_failure(*source, reason),
            _ => None,
        }
    }

    /// Reduce a batch to its freshest fix and forward it.
    ///
    /// Significant-change batches are not forwarded; while a one-shot
    /// subscriber exists they re-request a precise fix.
    pub fn handle_locations<P: LocationPlatform + ?Sized>(
        &mut self,
        platform: &mut P,
        source:   LocationSource,
        fixes:    &[Fix],
    ) -> Option<Acquisition> {
        let freshest = Fix::freshest(fixes)?;

        match source {
            LocationSource::SignificantChange => {
                match self.active {
                    Some(Subscription { mode: AcquisitionMode::OneShot, id }) => {
                        tracing::debug!(request = %id, coarse = %freshest.coordinate, "significant change, re-requesting precise fix");
                        platform.request_one_fix();
                    }
                    _ => tracing::debug!(coarse = %freshest.coordinate, "significant change ignored"),
                }
                None
            }
            LocationSource::Precise => {
                let Some(sub) = self.active else {
                    tracing::debug!(fix = %freshest.coordinate, "precise fix with no subscriber");
                    return None;
                };
                let fix = freshest.with_heading(freshest.heading.or(self.last_heading));
                self.last_fix = Some(fix);
                Some(Acquisition { request: sub.id, mode: sub.mode, result: Ok(fix) })
            }
        }
    }

    /// Remember `heading`; continuous subscribers with heading enabled get
    /// the last fix re-forwarded with it attached.
    pub fn handle_heading(&mut self, heading: Heading) -> Option<Acquisition> {
        self.last_heading = Some(heading);
        let sub = self.active?;
        match sub.mode {
            AcquisitionMode::Continuous { heading: true } => {
                let fix = self.last_fix?.with_heading(Some(heading));
                self.last_fix = Some(fix);
                Some(Acquisition { request: sub.id, mode: sub.mode, result: Ok(fix) })
            }
            _ => None,
        }
    }

    /// Forward a precise-capability failure.  Coarse failures are only
    /// logged.
    pub fn handle_failure(&mut self, source: LocationSource, reason: &str) -> Option<Acquisition> {
        match source {
            LocationSource::SignificantChange => {
                tracing::warn!(reason, "significant-change provider failed");
                None
            }
            LocationSource::Precise => {
                let sub = self.active?;
                Some(Acquisition {
                    request: sub.id,
                    mode:    sub.mode,
                    result:  Err(LocationError::LocationUnavailable(reason.to_owned())),
                })
            }
        }
    }

    fn subscribe(&mut self, mode: AcquisitionMode) -> RequestId {
        let id = self.ids.issue();
        if let Some(prev) = self.active.replace(Subscription { id, mode }) {
            tracing::debug!(superseded = %prev.id, request = %id, "acquisition subscriber replaced");
        }
        id
    }

    fn ensure_significant_changes<P: LocationPlatform + ?Sized>(&mut self, platform: &mut P) {
        if !self.significant_started {
            platform.start_significant_changes();
            self.significant_started = true;
        }
    }
}
