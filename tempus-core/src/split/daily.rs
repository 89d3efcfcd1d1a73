use chrono::{Datelike, Weekday};
use chrono_tz::Tz;

use crate::calendar::{is_weekend, local_date, local_midnight, next_day, tick};
use crate::{Slice, TempusError, TimeRange};

/// One slice per calendar day fully inside `range`.
///
/// # Errors
/// Returns `InvalidArgument` if a day boundary is not representable.
pub fn split_daily(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    walk_days(range, tz, |_| true)
}

/// One slice per Monday..Friday fully inside `range`.
///
/// # Errors
/// Returns `InvalidArgument` if a day boundary is not representable.
pub fn split_workdays(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    walk_days(range, tz, |day| !is_weekend(day))
}

/// One slice per Saturday and Sunday fully inside `range`.
///
/// # Errors
/// Returns `InvalidArgument` if a day boundary is not representable.
pub fn split_weekends(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    walk_days(range, tz, is_weekend)
}

fn walk_days<F>(range: TimeRange, tz: Tz, keep: F) -> Result<Vec<Slice>, TempusError>
where
    F: Fn(Weekday) -> bool,
{
    let mut out = Vec::new();
    let mut day = local_date(range.start, tz);
    let mut start = local_midnight(day, tz)?;

    while start < range.end {
        let next = next_day(day)?;
        let next_start = local_midnight(next, tz)?;
        if keep(day.weekday()) {
            let end = next_start - tick();
            if range.contains(start, end) {
                out.push(Slice::new(start, end));
            }
        }
        day = next;
        start = next_start;
    }

    Ok(out)
}
