//! The `BackgroundTracker` orchestrator.

use std::path::Path;

use bgl_acquire::{Acquisition, LocationAcquirer};
use bgl_auth::{AuthorizationNegotiator, AuthorizationOutcome, NegotiationState, RequestProgress};
use bgl_cache::{JsonFileStore, KeyValueRegionCache, RegionCoordinateCache};
use bgl_core::{Coordinate, Fix, LocationError, LocationResult};
use bgl_platform::{BackgroundToken, LocationPlatform, PlatformEvent};
use tracing::{debug, info, warn};

use crate::session::{RefreshSlot, SessionMode, TrackingSession};
use crate::{Ring, RingListener, TrackerConfig, TrackerResult, TrackingListener};

/// Coarse lifecycle state, for hosts and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackerState {
    /// No session; platform events are dropped.
    Idle,
    /// A session is open.  `has_ring` is set once a ring has been placed.
    Tracking { has_ring: bool },
}

/// Keeps the device position current at low power.
///
/// Each accepted fix re-centres a ring of overlapping geofences on the
/// device.  Crossing any member wakes the process with the member's
/// identifier; the tracker resolves it through the [`RegionCoordinateCache`],
/// requests one fresh fix and places the next ring.  Significant-change wakes
/// re-arm a fix request the same way.
///
/// The tracker never calls into the platform from a callback.  The host
/// delivers platform callbacks as [`PlatformEvent`]s through
/// [`handle_event`](Self::handle_event), one at a time, and the tracker issues
/// commands on the [`LocationPlatform`] it owns.
///
/// # Delivery rules
///
/// - A fix reaches the listener only if its position differs from the last
///   accepted one (or is farther than `min_displacement_m` when that is
///   set).  Every delivered fix has a ring placed around it first.
/// - Authorization and acquisition failures are delivered as `Err`.
/// - A refresh started by a region crossing that fails to acquire falls back
///   to the crossed member's cached center, or to the last accepted fix when
///   the identifier is not cached.  The fallback bypasses the movement gate:
///   the ring is always re-placed there and a fix with that coordinate is
///   delivered.
pub struct BackgroundTracker<P: LocationPlatform, C: RegionCoordinateCache> {
    config:        TrackerConfig,
    platform:      P,
    cache:         C,
    negotiator:    AuthorizationNegotiator,
    acquirer:      LocationAcquirer,
    session:       Option<TrackingSession>,
    ring:          Option<Ring>,
    ring_listener: Option<Box<dyn RingListener>>,
}

impl<P: LocationPlatform, C: RegionCoordinateCache> BackgroundTracker<P, C> {
    /// Create an idle tracker.  Fails only on an invalid `config`.
    pub fn new(platform: P, cache: C, config: TrackerConfig) -> TrackerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            platform,
            cache,
            negotiator:    AuthorizationNegotiator::new(),
            acquirer:      LocationAcquirer::new(),
            session:       None,
            ring:          None,
            ring_listener: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable platform access, for hosts that drive a simulated platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn state(&self) -> TrackerState {
        match self.session {
            None => TrackerState::Idle,
            Some(_) => TrackerState::Tracking { has_ring: self.ring.is_some() },
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// The session's last accepted fix.
    pub fn last_fix(&self) -> Option<Fix> {
        self.session.as_ref().and_then(|s| s.last_fix)
    }

    /// The most recently placed ring.  Survives `stop`; the platform keeps
    /// monitoring it.
    pub fn ring(&self) -> Option<&Ring> {
        self.ring.as_ref()
    }

    pub fn negotiation_state(&self) -> &NegotiationState {
        self.negotiator.state()
    }

    /// The open background-execution token, if any.
    pub fn background_token(&self) -> Option<BackgroundToken> {
        self.session.as_ref().and_then(|s| s.background.current())
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Register a listener for ring placements.  Replaces any previous one.
    pub fn on_ring_changed(&mut self, listener: impl RingListener + 'static) {
        self.set_ring_listener(Box::new(listener));
    }

    pub(crate) fn set_ring_listener(&mut self, listener: Box<dyn RingListener>) {
        self.ring_listener = Some(listener);
    }

    /// Start foreground tracking: when-in-use authorization, then one fix.
    pub fn start(&mut self, listener: impl TrackingListener + 'static) {
        self.begin_session(Box::new(listener), SessionMode::Foreground);
    }

    /// Start background tracking: always authorization, a background token
    /// held until the first refresh resolves, then one fix.
    ///
    /// Also the entry point after the OS relaunches the process for a
    /// geofence crossing; feed the crossing afterwards.
    pub fn start_background(&mut self, listener: impl TrackingListener + 'static) {
        self.begin_session(Box::new(listener), SessionMode::Background);
    }

    /// End the session.  Later platform events are ignored until the next
    /// start.  The monitored ring is left in place.
    pub fn stop(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.background.end(&mut self.platform);
        info!(mode = ?session.mode, "tracking stopped");
    }

    /// Feed one platform callback.
    pub fn handle_event(&mut self, event: PlatformEvent) {
        if self.session.is_none() {
            debug!(kind = event.kind(), "tracker idle, event dropped");
            return;
        }
        match event {
            PlatformEvent::AuthorizationChanged(status) => {
                if let Some(outcome) = self.negotiator.on_authorization_changed(&mut self.platform, status) {
                    self.apply_authorization(outcome);
                }
            }
            PlatformEvent::RegionEntered { identifier } => self.on_region_entered(&identifier),
            PlatformEvent::BackgroundExpired(token) => self.on_background_expired(token),
            other => {
                if let Some(acquisition) = self.acquirer.handle_event(&mut self.platform, &other) {
                    self.on_acquisition(acquisition);
                }
            }
        }
    }

    // ── Session internals ─────────────────────────────────────────────────

    fn begin_session(&mut self, listener: Box<dyn TrackingListener>, mode: SessionMode) {
        // A second start replaces the listener and mode but keeps the open
        // token and the last accepted fix.
        let mut session = match self.session.take() {
            Some(mut existing) => {
                existing.listener = listener;
                existing.mode = mode;
                existing
            }
            None => TrackingSession::new(listener, mode),
        };
        info!(?mode, "tracking started");

        let pending = match self.negotiator.request(&mut self.platform, mode.tier()) {
            RequestProgress::Pending(id) => Some(id),
            RequestProgress::Completed(outcome) => {
                if let Err(err) = outcome.result {
                    warn!(%err, tier = %outcome.tier, "authorization refused");
                    session.listener.on_update(Err(err));
                }
                None
            }
        };
        session.authorization = pending;

        if mode == SessionMode::Background {
            session.background.begin(&mut self.platform, &self.config.background_task_name);
        }
        self.session = Some(session);
        self.refresh(None);
    }

    /// Issue a one-shot fix request owned by the session.
    fn refresh(&mut self, fallback: Option<Coordinate>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let request = self.acquirer.request_one_shot(&mut self.platform);
        debug!(%request, fallback = fallback.is_some(), "refresh requested");
        session.refresh = Some(RefreshSlot { request, fallback });
    }

    fn apply_authorization(&mut self, outcome: AuthorizationOutcome) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.authorization != Some(outcome.request) {
            debug!(request = %outcome.request, "stale authorization outcome ignored");
            return;
        }
        session.authorization = None;

        match outcome.result {
            Ok(tier) => {
                info!(%tier, "authorization granted");
                // A fix request issued before the grant may have failed.
                if session.last_fix.is_none() {
                    self.refresh(None);
                }
            }
            Err(err) => {
                warn!(%err, tier = %outcome.tier, "authorization refused");
                session.listener.on_update(Err(err));
            }
        }
    }

    fn on_region_entered(&mut self, identifier: &str) {
        info!(identifier, "region entered");
        let resolved = match self.cache.resolve(identifier) {
            Ok(Some(center)) => Some(center),
            Ok(None) => {
                warn!(identifier, "region not in cache");
                None
            }
            Err(err) => {
                warn!(identifier, %err, "region cache read failed");
                None
            }
        };

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let fallback = resolved.or_else(|| session.last_fix.map(|f| f.coordinate));
        if fallback.is_none() {
            session
                .listener
                .on_update(Err(LocationError::RegionResolutionMiss(identifier.to_owned())));
        }
        if session.mode == SessionMode::Background {
            session.background.begin(&mut self.platform, &self.config.background_task_name);
        }
        self.refresh(fallback);
    }

    fn on_background_expired(&mut self, token: BackgroundToken) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.background.current() != Some(token) {
            debug!(%token, "expiry for a token that is not open");
            return;
        }
        warn!(%token, "background time expired");
        session.background.end(&mut self.platform);
        let fallback = session.refresh.and_then(|slot| slot.fallback);
        self.refresh(fallback);
    }

    fn on_acquisition(&mut self, acquisition: Acquisition) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let fallback = match session.refresh.as_mut() {
            Some(slot) if slot.request == acquisition.request => slot.fallback.take(),
            _ => {
                debug!(request = %acquisition.request, "acquisition for another subscriber ignored");
                return;
            }
        };

        match acquisition.result {
            Ok(fix) => self.accept_fix(fix),
            Err(err) => self.refresh_failed(err, fallback),
        }

        if let Some(session) = self.session.as_mut() {
            session.background.end(&mut self.platform);
        }
    }

    fn refresh_failed(&mut self, err: LocationError, fallback: Option<Coordinate>) {
        match fallback {
            Some(center) => {
                // The gate is skipped: a fallback at the last position must
                // still re-arm the ring and reach the listener.
                warn!(%err, %center, "refresh failed, re-centring on fallback coordinate");
                self.commit_fix(Fix::new(center, self.platform.now()));
            }
            None => {
                warn!(%err, "refresh failed");
                self.deliver(Err(err));
            }
        }
    }

    /// Apply the movement gate, then commit.
    fn accept_fix(&mut self, fix: Fix) {
        let previous = self.session.as_ref().and_then(|s| s.last_fix);
        if let Some(prev) = previous {
            if !self.has_moved(prev.coordinate, fix.coordinate) {
                debug!(coordinate = %fix.coordinate, "device has not moved");
                return;
            }
        }
        self.commit_fix(fix);
    }

    fn has_moved(&self, from: Coordinate, to: Coordinate) -> bool {
        if self.config.min_displacement_m > 0.0 {
            from.distance_m(to) >= self.config.min_displacement_m
        } else {
            !from.same_position(to)
        }
    }

    /// Place a ring around `fix`, record it, and deliver it.
    fn commit_fix(&mut self, fix: Fix) {
        self.place_ring(fix.coordinate);
        if let Some(session) = self.session.as_mut() {
            session.last_fix = Some(fix);
        }
        self.deliver(Ok(fix));
    }

    fn deliver(&mut self, update: LocationResult<Fix>) {
        if let Some(session) = self.session.as_mut() {
            session.listener.on_update(update);
        }
    }

    // ── Ring placement ────────────────────────────────────────────────────

    fn place_ring(&mut self, center: Coordinate) {
        self.clear_ring();

        let ring = Ring::around(center, &self.config.region, &self.config.namespace);
        // The cache must hold every member before the platform can report a
        // crossing of it.
        if let Err(err) = self.cache.save(&ring.regions) {
            warn!(%err, "region cache write failed");
        }
        for region in &ring.regions {
            self.platform.monitor_region(region);
        }
        info!(%center, regions = ring.len(), "ring placed");

        if let Some(listener) = self.ring_listener.as_mut() {
            listener.on_ring_changed(&ring);
        }
        self.ring = Some(ring);
    }

    /// Stop monitoring every ring member under our namespace.  Regions
    /// registered by other code are left alone.
    fn clear_ring(&mut self) {
        let ours: Vec<String> = self
            .platform
            .monitored_regions()
            .into_iter()
            .filter(|id| Ring::is_member_identifier(&self.config.namespace, id))
            .collect();
        for identifier in &ours {
            self.platform.stop_monitoring_region(identifier);
        }
        if !ours.is_empty() {
            debug!(cleared = ours.len(), "previous ring cleared");
        }
    }
}

impl<P: LocationPlatform> BackgroundTracker<P, KeyValueRegionCache<JsonFileStore>> {
    /// Create an idle tracker persisting ring members to the JSON file at
    /// `path`, keyed by the configured namespace.
    pub fn with_json_cache(platform: P, path: &Path, config: TrackerConfig) -> TrackerResult<Self> {
        config.validate()?;
        let cache = KeyValueRegionCache::new(JsonFileStore::open(path)?, config.namespace.clone());
        Self::new(platform, cache, config)
    }
}
