//! The `LocationPlatform` trait.

use bgl_core::{AuthorizationStatus, AuthorizationTier, GeofenceRegion, Timestamp};

use crate::BackgroundToken;

/// Commands the engine issues to the operating system's location services.
///
/// Implementations wrap the real OS handles on device and a fake in tests
/// (see [`RecordingPlatform`][crate::RecordingPlatform]).  Every method is
/// fire-and-forget: results come back later as
/// [`PlatformEvent`][crate::PlatformEvent]s.
///
/// The engine owns its platform by value and passes `&mut` access down to
/// the negotiator and acquirer, so implementations need no interior
/// mutability.
pub trait LocationPlatform {
    /// The authorization status the OS currently reports.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Prompt the user for `tier`.  The answer arrives as
    /// `PlatformEvent::AuthorizationChanged`.
    fn request_authorization(&mut self, tier: AuthorizationTier);

    /// Subscribe to continuous precise updates, plus heading updates when
    /// `heading` is set.
    fn start_updates(&mut self, heading: bool);

    /// Unsubscribe continuous updates and heading updates.
    fn stop_updates(&mut self);

    /// Ask for a single fresh precise fix.
    fn request_one_fix(&mut self);

    /// Subscribe to the coarse significant-change wake signal.
    fn start_significant_changes(&mut self);

    /// Start monitoring `region`.  Monitoring an identifier that is already
    /// monitored replaces it.
    fn monitor_region(&mut self, region: &GeofenceRegion);

    /// Stop monitoring the region with `identifier`.  Unknown identifiers
    /// are ignored.
    fn stop_monitoring_region(&mut self, identifier: &str);

    /// Identifiers of every region currently monitored for this app.
    fn monitored_regions(&self) -> Vec<String>;

    /// Ask the OS for bounded extra runtime while suspended.
    fn begin_background_execution(&mut self, name: &str) -> BackgroundToken;

    /// Release a token obtained from `begin_background_execution`.
    fn end_background_execution(&mut self, token: BackgroundToken);

    /// Current wall-clock time as the platform sees it.
    fn now(&self) -> Timestamp;
}
