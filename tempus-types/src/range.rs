//! Input ranges and output slices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TempusError;

/// Absolute time range `[start, end]`, both ends inclusive.
///
/// `start <= end` is expected but not enforced; a reversed range simply
/// produces few or no slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// First instant covered by the range.
    pub start: DateTime<Utc>,
    /// Last instant covered by the range.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range from two instants.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a range from milliseconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `InvalidArgument("time range format error")` if either value is
    /// outside the range chrono can represent.
    pub fn from_millis(start_ms: i64, end_ms: i64) -> Result<Self, TempusError> {
        let start = DateTime::from_timestamp_millis(start_ms).ok_or_else(TempusError::range_format)?;
        let end = DateTime::from_timestamp_millis(end_ms).ok_or_else(TempusError::range_format)?;
        Ok(Self { start, end })
    }

    /// Interpret a raw `[start, end, ..]` millisecond array.
    ///
    /// Only the first two elements are read; anything after them is ignored.
    ///
    /// # Errors
    /// Returns `InvalidArgument("time range format error")` when fewer than two
    /// elements are present or a value is not representable.
    pub fn try_from_millis_slice(raw: &[i64]) -> Result<Self, TempusError> {
        match raw {
            [start, end, ..] => Self::from_millis(*start, *end),
            _ => Err(TempusError::range_format()),
        }
    }

    /// Whether `start` is after `end`.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Whether a candidate `[start, end]` lies entirely inside this range.
    #[must_use]
    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start >= self.start && end <= self.end
    }
}

impl TryFrom<&[DateTime<Utc>]> for TimeRange {
    type Error = TempusError;

    fn try_from(raw: &[DateTime<Utc>]) -> Result<Self, Self::Error> {
        match raw {
            [start, end, ..] => Ok(Self::new(*start, *end)),
            _ => Err(TempusError::range_format()),
        }
    }
}

/// One calendar-aligned sub-interval `[start, end]` of a [`TimeRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slice {
    /// First instant of the slice.
    pub start: DateTime<Utc>,
    /// Last instant of the slice (inclusive).
    pub end: DateTime<Utc>,
}

impl Slice {
    /// Build a slice from its bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Slice start as milliseconds since the Unix epoch.
    #[must_use]
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Slice end as milliseconds since the Unix epoch.
    #[must_use]
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp_millis()
    }

    /// `[start, end]` in milliseconds, the shape most callers forward downstream.
    #[must_use]
    pub fn to_millis(&self) -> [i64; 2] {
        [self.start_millis(), self.end_millis()]
    }
}
