//! Period slicing strategies.
//!
//! All strategies walk forward through calendar-aligned periods starting at
//! the period that contains `range.start`, stopping once a period's start is
//! no longer before `range.end`. They differ in which candidates they keep:
//!
//! - `daily`, `workday`, `weekend` and `weekly` keep only candidates that lie
//!   fully inside the range and silently drop the rest.
//! - `monthly` keeps every month it touches and clips the month end to
//!   `range.end`.
//! - `yearly` skips years starting before `range.start` and stops at the
//!   first year ending after `range.end`.

/// Day-based walks: every day, workdays, weekends.
pub mod daily;
/// Calendar-month walk with trailing clip.
pub mod monthly;
/// Monday-to-Sunday week walk.
pub mod weekly;
/// Calendar-year walk.
pub mod yearly;

use chrono_tz::Tz;

use crate::{PeriodKind, Slice, TempusError, TimeRange};

pub use daily::{split_daily, split_weekends, split_workdays};
pub use monthly::split_monthly;
pub use weekly::split_weekly;
pub use yearly::split_yearly;

/// Split `range` into calendar-aligned slices of the given `kind`, computing
/// boundaries in `tz`.
///
/// Slices come back in chronological order and never overlap.
///
/// # Errors
/// Returns `InvalidArgument` if a period boundary falls outside the calendar
/// chrono can represent.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempus_core::{PeriodKind, TimeRange, split};
///
/// let tz = chrono_tz::Asia::Shanghai;
/// let start = tz.with_ymd_and_hms(2024, 6, 24, 0, 0, 0).unwrap();
/// let end = tz.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
/// let range = TimeRange::new(start.with_timezone(&Utc), end.with_timezone(&Utc));
///
/// let slices = split(PeriodKind::Weekend, range, tz).unwrap();
/// assert_eq!(slices.len(), 1); // Sunday ends at 23:59:59.999, after range.end
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tempus_core::split",
        skip(range),
        fields(start = %range.start, end = %range.end),
    )
)]
pub fn split(kind: PeriodKind, range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    #[cfg(feature = "tracing")]
    {
        if range.is_reversed() {
            tracing::debug!(kind = %kind, "time range is reversed; expect few or no slices");
        }
    }

    let slices = match kind {
        PeriodKind::Daily => split_daily(range, tz),
        PeriodKind::Workday => split_workdays(range, tz),
        PeriodKind::Weekend => split_weekends(range, tz),
        PeriodKind::Weekly => split_weekly(range, tz),
        PeriodKind::Monthly => split_monthly(range, tz),
        PeriodKind::Yearly => split_yearly(range, tz),
    }?;

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = %kind, slices = slices.len(), "split time range");

    Ok(slices)
}
