use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Asia::Shanghai;
use tempus_core::{
    PeriodKind, Slice, TimeRange, split, split_daily, split_monthly, split_weekends, split_weekly,
    split_workdays, split_yearly,
};

fn sh(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> DateTime<Utc> {
    Shanghai
        .with_ymd_and_hms(y, m, d, h, mi, s)
        .unwrap()
        .with_timezone(&Utc)
        + TimeDelta::milliseconds(ms)
}

fn ds(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    sh(y, m, d, 0, 0, 0, 0)
}

fn de(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    sh(y, m, d, 23, 59, 59, 999)
}

fn day(y: i32, m: u32, d: u32) -> Slice {
    Slice::new(ds(y, m, d), de(y, m, d))
}

#[test]
fn daily_three_full_days() {
    let range = TimeRange::new(ds(2024, 6, 1), de(2024, 6, 3));
    let out = split_daily(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![day(2024, 6, 1), day(2024, 6, 2), day(2024, 6, 3)]
    );
}

#[test]
fn daily_drops_partial_days_at_both_edges() {
    let range = TimeRange::new(sh(2024, 6, 1, 12, 0, 0, 0), sh(2024, 6, 3, 12, 0, 0, 0));
    let out = split_daily(range, Shanghai).unwrap();
    assert_eq!(out, vec![day(2024, 6, 2)]);
}

#[test]
fn daily_consecutive_slices_are_one_tick_apart() {
    let range = TimeRange::new(ds(2024, 2, 27), de(2024, 3, 2));
    let out = split_daily(range, Shanghai).unwrap();
    assert_eq!(out.len(), 5);
    for w in out.windows(2) {
        assert_eq!(w[1].start - w[0].end, TimeDelta::milliseconds(1));
    }
}

#[test]
fn workdays_of_a_full_week() {
    let range = TimeRange::new(ds(2024, 6, 24), de(2024, 6, 30));
    let out = split_workdays(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![
            day(2024, 6, 24),
            day(2024, 6, 25),
            day(2024, 6, 26),
            day(2024, 6, 27),
            day(2024, 6, 28),
        ]
    );
}

#[test]
fn weekends_of_a_full_week() {
    let range = TimeRange::new(ds(2024, 6, 24), de(2024, 6, 30));
    let out = split_weekends(range, Shanghai).unwrap();
    assert_eq!(out, vec![day(2024, 6, 29), day(2024, 6, 30)]);
}

#[test]
fn weekly_keeps_only_full_weeks() {
    // Wednesday to Wednesday
    let range = TimeRange::new(ds(2024, 6, 5), ds(2024, 6, 19));
    let out = split_weekly(range, Shanghai).unwrap();
    assert_eq!(out, vec![Slice::new(ds(2024, 6, 10), de(2024, 6, 16))]);
}

#[test]
fn weekly_starting_on_sunday_neither_skips_nor_repeats() {
    let range = TimeRange::new(ds(2024, 6, 9), de(2024, 6, 23));
    let out = split_weekly(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![
            Slice::new(ds(2024, 6, 10), de(2024, 6, 16)),
            Slice::new(ds(2024, 6, 17), de(2024, 6, 23)),
        ]
    );

    let late_sunday = TimeRange::new(sh(2024, 6, 9, 23, 59, 59, 999), de(2024, 6, 16));
    let out = split_weekly(late_sunday, Shanghai).unwrap();
    assert_eq!(out, vec![Slice::new(ds(2024, 6, 10), de(2024, 6, 16))]);
}

#[test]
fn weekly_starting_on_monday_includes_that_week() {
    let range = TimeRange::new(ds(2024, 6, 10), de(2024, 6, 16));
    let out = split_weekly(range, Shanghai).unwrap();
    assert_eq!(out, vec![Slice::new(ds(2024, 6, 10), de(2024, 6, 16))]);

    let short = TimeRange::new(ds(2024, 6, 10), sh(2024, 6, 16, 23, 59, 59, 998));
    assert!(split_weekly(short, Shanghai).unwrap().is_empty());
}

#[test]
fn monthly_clips_trailing_month_to_range_end() {
    let end = ds(2024, 3, 10);
    let range = TimeRange::new(ds(2024, 1, 15), end);
    let out = split_monthly(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![
            Slice::new(ds(2024, 1, 1), de(2024, 1, 31)),
            Slice::new(ds(2024, 2, 1), de(2024, 2, 29)),
            Slice::new(ds(2024, 3, 1), end),
        ]
    );
}

#[test]
fn monthly_leading_month_starts_on_day_one() {
    let range = TimeRange::new(sh(2024, 5, 10, 8, 30, 0, 0), sh(2024, 5, 20, 18, 0, 0, 0));
    let out = split_monthly(range, Shanghai).unwrap();
    assert_eq!(out, vec![Slice::new(ds(2024, 5, 1), range.end)]);
}

#[test]
fn monthly_range_ending_on_month_end_is_not_clipped() {
    let range = TimeRange::new(ds(2023, 12, 1), de(2024, 2, 29));
    let out = split_monthly(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![
            Slice::new(ds(2023, 12, 1), de(2023, 12, 31)),
            Slice::new(ds(2024, 1, 1), de(2024, 1, 31)),
            Slice::new(ds(2024, 2, 1), de(2024, 2, 29)),
        ]
    );
}

#[test]
fn yearly_skips_year_starting_before_range() {
    let range = TimeRange::new(ds(2023, 6, 1), de(2024, 12, 31));
    let out = split_yearly(range, Shanghai).unwrap();
    assert_eq!(out, vec![Slice::new(ds(2024, 1, 1), de(2024, 12, 31))]);
}

#[test]
fn yearly_drops_trailing_partial_year() {
    let range = TimeRange::new(ds(2022, 1, 1), ds(2024, 6, 1));
    let out = split_yearly(range, Shanghai).unwrap();
    assert_eq!(
        out,
        vec![
            Slice::new(ds(2022, 1, 1), de(2022, 12, 31)),
            Slice::new(ds(2023, 1, 1), de(2023, 12, 31)),
        ]
    );

    let midnight_end = TimeRange::new(ds(2023, 6, 1), ds(2024, 12, 31));
    assert!(split_yearly(midnight_end, Shanghai).unwrap().is_empty());
}

#[test]
fn reversed_range_yields_nothing_for_contained_kinds() {
    let range = TimeRange::new(de(2024, 6, 30), ds(2024, 6, 1));
    for kind in [
        PeriodKind::Daily,
        PeriodKind::Workday,
        PeriodKind::Weekend,
        PeriodKind::Weekly,
        PeriodKind::Yearly,
    ] {
        assert!(split(kind, range, Shanghai).unwrap().is_empty(), "{kind}");
    }
}

#[test]
fn dispatch_matches_strategy_functions() {
    let range = TimeRange::new(ds(2023, 11, 20), de(2025, 1, 5));
    assert_eq!(
        split(PeriodKind::Daily, range, Shanghai).unwrap(),
        split_daily(range, Shanghai).unwrap()
    );
    assert_eq!(
        split(PeriodKind::Workday, range, Shanghai).unwrap(),
        split_workdays(range, Shanghai).unwrap()
    );
    assert_eq!(
        split(PeriodKind::Weekend, range, Shanghai).unwrap(),
        split_weekends(range, Shanghai).unwrap()
    );
    assert_eq!(
        split(PeriodKind::Weekly, range, Shanghai).unwrap(),
        split_weekly(range, Shanghai).unwrap()
    );
    assert_eq!(
        split(PeriodKind::Monthly, range, Shanghai).unwrap(),
        split_monthly(range, Shanghai).unwrap()
    );
    assert_eq!(
        split(PeriodKind::Yearly, range, Shanghai).unwrap(),
        split_yearly(range, Shanghai).unwrap()
    );
}

#[test]
fn boundaries_follow_the_given_zone() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 23, 59, 59).unwrap() + TimeDelta::milliseconds(999);
    let range = TimeRange::new(start, end);

    let utc_days = split_daily(range, chrono_tz::UTC).unwrap();
    assert_eq!(utc_days.len(), 2);
    assert_eq!(utc_days[0].start, start);

    // Shanghai days run 16:00Z..15:59:59.999Z; only 2024-06-02 fits.
    let sh_days = split_daily(range, Shanghai).unwrap();
    assert_eq!(sh_days, vec![day(2024, 6, 2)]);
}
