use chrono_tz::Tz;

use crate::calendar::{add_months, first_of_month, local_date, local_midnight, tick};
use crate::{Slice, TempusError, TimeRange};

/// One slice per calendar month touched by `range`.
///
/// Every month is emitted. The first slice starts on day 1 of the month
/// containing `range.start`, even when that precedes `range.start`. A month
/// ending after `range.end` is clipped to end exactly at `range.end`.
///
/// # Errors
/// Returns `InvalidArgument` if a month boundary is not representable.
pub fn split_monthly(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    let mut month = first_of_month(local_date(range.start, tz))?;
    let mut start = local_midnight(month, tz)?;

    let mut out = Vec::new();
    while start < range.end {
        let next = add_months(month, 1)?;
        let next_start = local_midnight(next, tz)?;
        let mut end = next_start - tick();
        if end < start || end > range.end {
            end = range.end;
        }
        out.push(Slice::new(start, end));
        month = next;
        start = next_start;
    }

    Ok(out)
}
