//! Engine error types.
//!
//! Two families live here and they travel differently:
//!
//! - [`CoreError`] is returned as `Err` from constructors and validators.  It
//!   means the caller handed the engine something unusable.
//! - [`LocationError`] is *delivered* to tracking listeners.  It never aborts
//!   a session; the tracker keeps running and retries on the next wake.

use thiserror::Error;

/// Configuration and validation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("coordinate ({lat}, {lon}) is outside the WGS-84 range")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for configuration-level failures.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failures surfaced to the application listener.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The requested authorization tier was never granted.
    #[error("location authorization denied")]
    AuthorizationDenied,

    /// When-in-use was granted but the user refused the escalation to always.
    #[error("location authorization could not be escalated to always")]
    AuthorizationEscalationRefused,

    /// The platform failed to produce a fix.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// A crossed geofence identifier had no cached coordinate.
    #[error("no cached coordinate for region {0}")]
    RegionResolutionMiss(String),
}

/// Result type carried by listener callbacks.
pub type LocationResult<T> = Result<T, LocationError>;
