//! `bgl-core` — foundational types for the `bgloc` background-tracking engine.
//!
//! This crate is a dependency of every other `bgl-*` crate.  It has no
//! `bgl-*` dependencies and only `thiserror` (plus optional `serde`) from
//! outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, great-circle `destination`, haversine distance |
//! | [`fix`]    | `Fix`, `Heading`, freshest-in-batch selection                |
//! | [`region`] | `GeofenceRegion`, `RegionConfig`, ring identifiers           |
//! | [`auth`]   | `AuthorizationTier`, `AuthorizationStatus`                   |
//! | [`time`]   | `Timestamp`                                                  |
//! | [`ids`]    | `RequestId`, `RequestIds`                                    |
//! | [`error`]  | `CoreError`, `LocationError`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod auth;
pub mod error;
pub mod fix;
pub mod geo;
pub mod ids;
pub mod region;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use auth::{AuthorizationStatus, AuthorizationTier};
pub use error::{CoreError, CoreResult, LocationError, LocationResult};
pub use fix::{Fix, Heading};
pub use geo::{Coordinate, EARTH_RADIUS_M};
pub use ids::{RequestId, RequestIds};
pub use region::{GeofenceRegion, RegionConfig, region_identifier};
pub use time::Timestamp;
