use chrono_tz::Tz;

use crate::calendar::{add_months, first_of_year, local_date, local_midnight, tick};
use crate::{Slice, TempusError, TimeRange};

/// One slice per full calendar year inside `range`.
///
/// A year starting before `range.start` is skipped. The walk stops at the
/// first year ending after `range.end`, so a trailing partial year is dropped
/// rather than clipped.
///
/// # Errors
/// Returns `InvalidArgument` if a year boundary is not representable.
pub fn split_yearly(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    let mut year = first_of_year(local_date(range.start, tz))?;
    let mut start = local_midnight(year, tz)?;

    let mut out = Vec::new();
    while start < range.end {
        let next = add_months(year, 12)?;
        let next_start = local_midnight(next, tz)?;
        let end = next_start - tick();
        if end > range.end {
            break;
        }
        if start >= range.start {
            out.push(Slice::new(start, end));
        }
        year = next;
        start = next_start;
    }

    Ok(out)
}
