//! Calendar boundary helpers evaluated in a reference time zone.
//!
//! Every helper converts the UTC instant into a zoned calendar date, moves to
//! the wanted boundary on the local calendar, and converts local midnight
//! back to UTC. Period ends are one [`tick`] before the next period's start.

use chrono::offset::{LocalResult, Offset};
use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Utc, Weekday,
};
use chrono_tz::Tz;

use crate::TempusError;

/// Gap between the end of one period and the start of the next.
#[must_use]
pub fn tick() -> TimeDelta {
    TimeDelta::milliseconds(1)
}

/// Calendar date of `ts` as seen in `tz`.
#[must_use]
pub fn local_date(ts: DateTime<Utc>, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

/// UTC instant of local midnight of `date` in `tz`.
///
/// Ambiguous midnights take the earlier mapping. A midnight skipped by a
/// forward transition resolves to the first valid local instant of the day.
///
/// # Errors
/// Returns `InvalidArgument` when the result is not representable.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => skipped_midnight(naive, tz),
    }
}

// Interpret the missing wall-clock midnight with the offset in force just
// before the gap; that lands on the first instant after it.
fn skipped_midnight(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    let probe = naive
        .checked_sub_signed(TimeDelta::days(1))
        .ok_or_else(TempusError::calendar_overflow)?;
    let before = tz.offset_from_utc_datetime(&probe).fix().local_minus_utc();
    naive
        .checked_sub_signed(TimeDelta::seconds(i64::from(before)))
        .map(|utc| Utc.from_utc_datetime(&utc))
        .ok_or_else(TempusError::calendar_overflow)
}

/// Last tick of the calendar day `date` in `tz`.
///
/// # Errors
/// Returns `InvalidArgument` when the following day is not representable.
pub fn last_tick_of(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    Ok(local_midnight(next_day(date)?, tz)? - tick())
}

/// Start of the calendar day containing `ts` (`00:00:00.000` local).
///
/// # Errors
/// Returns `InvalidArgument` when the boundary is not representable.
pub fn start_of_day(ts: DateTime<Utc>, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    local_midnight(local_date(ts, tz), tz)
}

/// End of the calendar day containing `ts` (`23:59:59.999` local).
///
/// # Errors
/// Returns `InvalidArgument` when the boundary is not representable.
pub fn end_of_day(ts: DateTime<Utc>, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    last_tick_of(local_date(ts, tz), tz)
}

/// Start of the Monday-based week containing `ts`.
///
/// # Errors
/// Returns `InvalidArgument` when the boundary is not representable.
pub fn start_of_week(ts: DateTime<Utc>, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    local_midnight(monday_on_or_before(local_date(ts, tz))?, tz)
}

/// Start of the calendar month containing `ts`.
///
/// # Errors
/// Returns `InvalidArgument` when the boundary is not representable.
pub fn start_of_month(ts: DateTime<Utc>, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    local_midnight(first_of_month(local_date(ts, tz))?, tz)
}

/// Start of the calendar year containing `ts`.
///
/// # Errors
/// Returns `InvalidArgument` when the boundary is not representable.
pub fn start_of_year(ts: DateTime<Utc>, tz: Tz) -> Result<DateTime<Utc>, TempusError> {
    local_midnight(first_of_year(local_date(ts, tz))?, tz)
}

/// Saturday or Sunday.
#[must_use]
pub const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

pub(crate) fn next_day(date: NaiveDate) -> Result<NaiveDate, TempusError> {
    date.succ_opt().ok_or_else(TempusError::calendar_overflow)
}

pub(crate) fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, TempusError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(TempusError::calendar_overflow)
}

pub(crate) fn monday_on_or_before(date: NaiveDate) -> Result<NaiveDate, TempusError> {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back))
        .ok_or_else(TempusError::calendar_overflow)
}

pub(crate) fn sunday_on_or_after(date: NaiveDate) -> Result<NaiveDate, TempusError> {
    add_days(date, u64::from(6 - date.weekday().num_days_from_monday()))
}

pub(crate) fn first_of_month(date: NaiveDate) -> Result<NaiveDate, TempusError> {
    date.with_day(1).ok_or_else(TempusError::calendar_overflow)
}

pub(crate) fn first_of_year(date: NaiveDate) -> Result<NaiveDate, TempusError> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).ok_or_else(TempusError::calendar_overflow)
}

pub(crate) fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TempusError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(TempusError::calendar_overflow)
}
