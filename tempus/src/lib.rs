//! Tempus splits absolute time ranges into calendar-aligned slices.
//!
//! Overview
//! - Six periodicities: every day, workdays (Mon–Fri), weekends (Sat–Sun),
//!   calendar weeks (Mon–Sun), calendar months and calendar years.
//! - Boundaries are computed in a reference time zone, `Asia/Shanghai` unless
//!   configured otherwise, and returned as UTC instants.
//! - A period ends one millisecond before the next one starts, so a day slice
//!   runs from `00:00:00.000` to `23:59:59.999` local time.
//!
//! Key behaviors
//! - Daily, workday, weekend and weekly: only periods fully inside the range
//!   are returned; partial leading and trailing periods are dropped.
//! - Monthly: every month the range touches is returned. The first slice
//!   starts on day 1 of its month and the last one is clipped to `range.end`.
//! - Yearly: only whole years inside the range are returned.
//! - Malformed raw input fails with `InvalidArgument`: "time range format
//!   error" for a range with fewer than two elements, "unknown time period"
//!   for an unrecognized selector.
//!
//! Examples
//! ```rust
//! use tempus::{PeriodKind, PeriodSplitter};
//!
//! let splitter = PeriodSplitter::new();
//! // 2024-06-24T00:00:00+08:00 .. 2024-06-30T23:59:59.999+08:00
//! let range = [1_719_158_400_000_i64, 1_719_763_199_999];
//!
//! let workdays = splitter.split_millis(PeriodKind::Workday, &range).unwrap();
//! assert_eq!(workdays.len(), 5);
//!
//! let weekends = splitter.split_named("weekend", &range).unwrap();
//! assert_eq!(weekends.len(), 2);
//! assert_eq!(weekends[1].to_millis(), [1_719_676_800_000, 1_719_763_199_999]);
//! ```
#![warn(missing_docs)]

mod splitter;

pub use splitter::{PeriodSplitter, PeriodSplitterBuilder};

// Re-export core types for convenience
pub use tempus_core::{
    DEFAULT_TIMEZONE, PeriodKind, Slice, SplitterConfig, TempusError, TimeRange, Tz, calendar,
};
