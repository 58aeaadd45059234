//! `bgl-platform` — the boundary between the engine and the operating
//! system's location services.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`platform`]  | `LocationPlatform` trait — every command the engine can issue  |
//! | [`event`]     | `PlatformEvent` — every callback the platform can deliver      |
//! | [`token`]     | `BackgroundToken`, `BackgroundTask` (idempotent begin/end)     |
//! | [`recording`] | `RecordingPlatform` — in-memory fake that records commands     |
//!
//! # Design notes
//!
//! The platform is split into a *command* half and an *event* half.  The
//! engine calls `LocationPlatform` methods synchronously and never waits on
//! them; anything the platform reports later arrives as a `PlatformEvent`
//! that the host feeds back into the tracker one at a time.  This keeps the
//! state machines free of re-entrant callbacks.

pub mod event;
pub mod platform;
pub mod recording;
pub mod token;


pub use event::{LocationSource, PlatformEvent};
pub use platform::LocationPlatform;
pub use recording::{PlatformCommand, RecordingPlatform};
pub use token::{BackgroundTask, BackgroundToken};
