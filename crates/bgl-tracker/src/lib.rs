//! `bgl-tracker` — the background tracking orchestrator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`tracker`]  | `BackgroundTracker`, `TrackerState`                       |
//! | [`builder`]  | `TrackerBuilder`                                          |
//! | [`ring`]     | `Ring` geometry                                           |
//! | [`config`]   | `TrackerConfig`                                           |
//! | [`listener`] | `TrackingListener`, `RingListener`                        |
//! | [`queue`]    | `event_channel`, `EventSink`                              |
//! | [`shared`]   | `SharedTracker` (`Arc<Mutex<_>>` handle)                  |
//! | [`error`]    | `TrackerError`, `TrackerResult`                           |
//!
//! # Refresh cycle
//!
//! ```text
//! start / start_background
//!   └─▶ authorization request ─▶ one-shot fix request
//!
//! fix arrives ──moved?──▶ clear our ring ─▶ cache members ─▶ monitor members
//!                         ─▶ ring listener ─▶ tracking listener
//!
//! region entered ─▶ resolve id in cache ─▶ (background token) ─▶ one-shot
//!                   fix request, falling back to the cached center on failure
//!
//! significant change ─▶ one-shot fix request
//! ```
//!
//! A background token opened by `start_background` or a crossing is closed
//! as soon as the refresh it covers resolves, and at `stop`.
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                    |
//! |----------|-----------------------------------------------------------|
//! | `serde`  | `Serialize`/`Deserialize` for `TrackerConfig`.            |
//! | `sqlite` | Enables `bgl_cache::SqliteStore`.                         |

pub mod builder;
pub mod config;
pub mod error;
pub mod listener;
pub mod queue;
pub mod ring;
pub mod session;
pub mod shared;
pub mod tracker;


pub use builder::TrackerBuilder;
pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use listener::{RingListener, TrackingListener};
pub use queue::{EventReceiver, EventSender, EventSink, event_channel};
pub use ring::Ring;
pub use session::SessionMode;
pub use shared::SharedTracker;
pub use tracker::{BackgroundTracker, TrackerState};
