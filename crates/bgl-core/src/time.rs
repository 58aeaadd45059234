//! Fix timestamps.
//!
//! Time is a Unix-epoch millisecond counter.  The engine never reads the
//! system clock itself; the platform supplies "now" so that tests and
//! replays stay deterministic.

use std::fmt;

/// Milliseconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    #[inline]
    pub fn from_unix_secs(secs: i64) -> Self {
        Timestamp(secs * 1_000)
    }

    #[inline]
    pub fn unix_millis(self) -> i64 {
        self.0
    }

    /// Return the timestamp `millis` after `self`.
    #[inline]
    pub fn offset_millis(self, millis: i64) -> Timestamp {
        Timestamp(self.0 + millis)
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier`
    /// is actually later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0.div_euclid(1_000), self.0.rem_euclid(1_000))
    }
}
