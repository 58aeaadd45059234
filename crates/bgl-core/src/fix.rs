//! Location fixes and heading samples.

use crate::{Coordinate, Timestamp};

/// A compass heading sample.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Degrees clockwise from true north, `[0, 360)`.
    pub true_deg: f64,
    /// Maximum deviation in degrees; negative means invalid.
    pub accuracy_deg: f64,
    pub timestamp: Timestamp,
}

/// One reported device position.  Immutable once produced.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub coordinate: Coordinate,
    pub timestamp:  Timestamp,
    pub heading:    Option<Heading>,
}

impl Fix {
    #[inline]
    pub fn new(coordinate: Coordinate, timestamp: Timestamp) -> Self {
        Self { coordinate, timestamp, heading: None }
    }

    /// Copy of this fix carrying `heading`.
    #[inline]
    pub fn with_heading(self, heading: Option<Heading>) -> Self {
        Self { heading, ..self }
    }

    /// The fix with the latest timestamp in `batch`.
    ///
    /// Ties go to the one examined last, so for equal timestamps the later
    /// element of the batch wins.  Returns `None` for an empty batch.
    pub fn freshest(batch: &[Fix]) -> Option<Fix> {
        batch.iter().copied().reduce(|best, candidate| {
            if candidate.timestamp >= best.timestamp { candidate } else { best }
        })
    }
}
