//! Monotonic request identifiers.
//!
//! Negotiator requests and acquirer subscriptions are each stamped with a
//! `RequestId`.  Outcomes carry the id they complete, so a caller that has
//! been superseded can tell that a late callback is not meant for it.

use std::fmt;

/// Identifier of one outstanding request.  Ids only ever grow within a
/// [`RequestIds`] sequence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A monotonic id generator.
#[derive(Debug, Default, Clone)]
pub struct RequestIds {
    next: u64,
}

impl RequestIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.  The first id is `RequestId(1)`.
    #[inline]
    pub fn issue(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }
}
