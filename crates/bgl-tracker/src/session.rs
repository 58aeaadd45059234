//! Per-session tracker state.

use bgl_core::{AuthorizationTier, Coordinate, Fix, RequestId};
use bgl_platform::BackgroundTask;

use crate::TrackingListener;

/// Which start call opened the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// `start`: when-in-use authorization, no background token.
    Foreground,
    /// `start_background`: always authorization and a background token.
    Background,
}

impl SessionMode {
    pub fn tier(self) -> AuthorizationTier {
        match self {
            SessionMode::Foreground => AuthorizationTier::WhenInUse,
            SessionMode::Background => AuthorizationTier::Always,
        }
    }
}

/// The refresh the session is waiting on.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RefreshSlot {
    /// Acquirer subscription whose acquisitions belong to this session.
    pub request:  RequestId,
    /// Coordinate to fall back to if the next acquisition fails.  Set only
    /// for refreshes started by a region crossing; consumed by the first
    /// acquisition.
    pub fallback: Option<Coordinate>,
}

/// State that lives from `start`/`start_background` until `stop`.
pub(crate) struct TrackingSession {
    pub listener:      Box<dyn TrackingListener>,
    pub mode:          SessionMode,
    pub last_fix:      Option<Fix>,
    pub background:    BackgroundTask,
    /// Authorization request this session is waiting on.
    pub authorization: Option<RequestId>,
    pub refresh:       Option<RefreshSlot>,
}

impl TrackingSession {
    pub fn new(listener: Box<dyn TrackingListener>, mode: SessionMode) -> Self {
        Self {
            listener,
            mode,
            last_fix:      None,
            background:    BackgroundTask::new(),
            authorization: None,
            refresh:       None,
        }
    }
}
