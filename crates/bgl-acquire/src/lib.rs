//! `bgl-acquire` — turns raw platform location callbacks into single,
//! freshest fixes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`acquirer`] | `LocationAcquirer`, `Acquisition`, `AcquisitionMode`       |
//!
//! # Acquisition model
//!
//! Two platform capabilities are involved:
//!
//! 1. The **precise** capability, used either continuously
//!    (`start_continuous`) or for a single fix (`request_one_shot`).
//! 2. The **significant-change** capability, a coarse low-power signal.
//!    Its fixes are never forwarded; each one only re-arms a one-shot
//!    request on the precise capability.  It is subscribed on the first
//!    one-shot request and left running by `stop`, which lets the next
//!    one-shot request be served immediately.
//!
//! Every batch is reduced to the fix with the latest timestamp before it is
//! forwarded.  Nothing is averaged or interpolated.
//!
//! The subscription is a single replaceable slot: the last caller wins, and
//! each forwarded [`Acquisition`] names the [`RequestId`][bgl_core::RequestId]
//! of the subscription that produced it.

pub mod acquirer;

#[cfg(test)]
mod tests;

pub use acquirer::{Acquisition, AcquisitionMode, LocationAcquirer};
