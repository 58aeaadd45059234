//! Typed platform callbacks.

use bgl_core::{AuthorizationStatus, Fix, Heading};

use crate::BackgroundToken;

/// Which subscription produced a location callback.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationSource {
    /// Continuous updates or a single-fix request.
    Precise,
    /// The coarse, low-power significant-change signal.
    SignificantChange,
}

/// Everything the platform can report back to the engine.
///
/// Hosts translate their native delegate callbacks into these values and
/// feed them to the tracker serially.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformEvent {
    /// A batch of fixes, oldest first as the OS delivers them.
    Locations {
        source: LocationSource,
        fixes:  Vec<Fix>,
    },

    /// A compass heading update.
    Heading(Heading),

    /// The platform could not produce a fix.
    LocationFailed {
        source: LocationSource,
        reason: String,
    },

    /// The authorization status changed (or was re-announced).
    AuthorizationChanged(AuthorizationStatus),

    /// The device entered a monitored region.
    RegionEntered { identifier: String },

    /// The OS is about to reclaim a background-execution token.
    BackgroundExpired(BackgroundToken),
}

impl PlatformEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PlatformEvent::Locations { .. }         => "locations",
            PlatformEvent::Heading(_)               => "heading",
            PlatformEvent::LocationFailed { .. }    => "location_failed",
            PlatformEvent::AuthorizationChanged(_)  => "authorization_changed",
            PlatformEvent::RegionEntered { .. }     => "region_entered",
            PlatformEvent::BackgroundExpired(_)     => "background_expired",
        }
    }
}
