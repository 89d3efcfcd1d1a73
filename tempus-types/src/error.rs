use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tempus workspace.
///
/// Splitting is pure arithmetic, so the only failure mode is bad input:
/// a malformed time range, an unknown period selector, an unknown time zone,
/// or a range that walks off the end of the supported calendar.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TempusError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TempusError {
    /// Message used when a raw time range is missing or has fewer than two elements.
    pub const RANGE_FORMAT: &'static str = "time range format error";
    /// Message used when a period selector does not name a known period kind.
    pub const UNKNOWN_PERIOD: &'static str = "unknown time period";
    /// Message used when calendar arithmetic leaves the representable date range.
    pub const CALENDAR_OVERFLOW: &'static str = "time range exceeds supported calendar";

    /// Helper: build an `InvalidArgument` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Helper: the raw time range could not be interpreted as `[start, end]`.
    #[must_use]
    pub fn range_format() -> Self {
        Self::invalid_arg(Self::RANGE_FORMAT)
    }

    /// Helper: the period selector is not one of the known kinds.
    #[must_use]
    pub fn unknown_period() -> Self {
        Self::invalid_arg(Self::UNKNOWN_PERIOD)
    }

    /// Helper: a boundary computation overflowed the supported calendar.
    #[must_use]
    pub fn calendar_overflow() -> Self {
        Self::invalid_arg(Self::CALENDAR_OVERFLOW)
    }

    /// Helper: the named time zone is not in the IANA database.
    pub fn unknown_timezone(name: impl AsRef<str>) -> Self {
        Self::invalid_arg(format!("unknown time zone: {}", name.as_ref()))
    }
}
