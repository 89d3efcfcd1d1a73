use chrono_tz::Tz;

use crate::calendar::{
    add_days, last_tick_of, local_date, local_midnight, monday_on_or_before, sunday_on_or_after,
    tick,
};
use crate::{Slice, TempusError, TimeRange};

/// One slice per Monday..Sunday week fully inside `range`.
///
/// The walk starts at the week containing `range.start`; partial weeks at
/// either end are dropped.
///
/// # Errors
/// Returns `InvalidArgument` if a week boundary is not representable.
pub fn split_weekly(range: TimeRange, tz: Tz) -> Result<Vec<Slice>, TempusError> {
    let date = local_date(range.start, tz);
    let mut monday = monday_on_or_before(date)?;
    let mut start = local_midnight(monday, tz)?;

    // Week must end on or after range.start, otherwise begin with the next one.
    if last_tick_of(sunday_on_or_after(date)?, tz)? < range.start {
        monday = add_days(monday, 7)?;
        start = local_midnight(monday, tz)?;
    }

    let mut out = Vec::new();
    while start < range.end {
        let next = add_days(monday, 7)?;
        let next_start = local_midnight(next, tz)?;
        let end = next_start - tick();
        if range.contains(start, end) {
            out.push(Slice::new(start, end));
        }
        monday = next;
        start = next_start;
    }

    Ok(out)
}
