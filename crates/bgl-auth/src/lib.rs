//! `bgl-auth` — negotiates a location authorization tier with the platform.
//!
//! # States
//!
//! ```text
//! Unrequested ─request─▶ PendingWhenInUse ─WhenInUse granted─▶ PendingAlways
//!      │                        │                                   │
//!      └──already satisfied──▶ Granted(tier) ◀──────satisfied───────┘
//!                               Denied(reason) ◀─refused / escalation refused
//! ```
//!
//! The platform refuses a direct prompt for `Always` from an undetermined
//! state, so an `Always` request first asks for `WhenInUse` and escalates
//! once that is granted.
//!
//! Only one request is outstanding at a time.  A new `request` replaces the
//! pending one; every request carries a [`RequestId`][bgl_core::RequestId]
//! and outcomes name the id they complete, so a superseded caller can tell
//! it will never be answered.

pub mod negotiator;


pub use negotiator::{AuthorizationNegotiator, AuthorizationOutcome, NegotiationState, RequestProgress};
