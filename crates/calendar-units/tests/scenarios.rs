//! Concrete calendar scenarios against real time zones.

use calendar_units::{
    add, add_unit, subtract, subtract_unit, CalendarError, CalendarService, CivilDateTime,
    Moment, TimeUnit, TimeUnitExt, ZonedCalendar,
};
use chrono::{DateTime, TimeZone, Utc};

fn new_york() -> ZonedCalendar {
    ZonedCalendar::from_name("America/New_York").unwrap()
}

fn civil(cal: &ZonedCalendar, y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    cal.from_components(&CivilDateTime::new(y, m, d, h, mi, s))
        .unwrap()
}

fn wall_clock(cal: &ZonedCalendar, t: DateTime<Utc>) -> String {
    cal.localize(t).format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[test]
fn day_after_2015_03_10_is_next_civil_midnight() {
    let cal = new_york();
    let base = civil(&cal, 2015, 3, 10, 0, 0, 0);
    let out = add(base, &[TimeUnit::Days(1)], &cal).unwrap();
    assert_eq!(wall_clock(&cal, out), "2015-03-11T00:00:00");
}

#[test]
fn day_across_spring_forward_is_23_hours() {
    let cal = new_york();
    let base = civil(&cal, 2015, 3, 8, 0, 0, 0);
    let out = add(base, &[TimeUnit::Days(1)], &cal).unwrap();
    assert_eq!(wall_clock(&cal, out), "2015-03-09T00:00:00");
    assert_eq!((out - base).num_seconds(), 23 * 3600);
}

#[test]
fn day_across_fall_back_is_25_hours() {
    let cal = new_york();
    let base = civil(&cal, 2015, 11, 1, 0, 0, 0);
    let out = add_unit(base, TimeUnit::Days(1), &cal).unwrap();
    assert_eq!(wall_clock(&cal, out), "2015-11-02T00:00:00");
    assert_eq!((out - base).num_seconds(), 25 * 3600);
}

#[test]
fn round_trip_across_spring_forward_from_midnight() {
    let cal = new_york();
    let base = civil(&cal, 2015, 3, 8, 0, 0, 0);
    let there = add_unit(base, TimeUnit::Days(1), &cal).unwrap();
    assert_eq!(subtract_unit(there, TimeUnit::Days(1), &cal).unwrap(), base);
}

#[test]
fn round_trip_into_gap_is_not_invertible() {
    // 02:30 on 2015-03-08 does not exist; the host moves it to 03:30
    let cal = new_york();
    let base = civil(&cal, 2015, 3, 7, 2, 30, 0);
    let there = add_unit(base, TimeUnit::Days(1), &cal).unwrap();
    assert_eq!(wall_clock(&cal, there), "2015-03-08T03:30:00");
    let back = subtract_unit(there, TimeUnit::Days(1), &cal).unwrap();
    assert_eq!(wall_clock(&cal, back), "2015-03-07T03:30:00");
}

#[test]
fn zero_years_is_identity() {
    let t = Utc.with_ymd_and_hms(2020, 1, 31, 10, 0, 0).unwrap();
    let cal = new_york();
    assert_eq!(add(t, &[TimeUnit::Years(0)], &cal).unwrap(), t);
}

#[test]
fn one_year_from_january_31() {
    let cal = new_york();
    let t = civil(&cal, 2020, 1, 31, 10, 0, 0);
    let out = add(t, &[TimeUnit::Years(1)], &cal).unwrap();
    assert_eq!(wall_clock(&cal, out), "2021-01-31T10:00:00");
}

#[test]
fn years_keep_wall_clock_across_offsets() {
    // July is EDT, January is EST; the wall clock stays at 09:00
    let cal = new_york();
    let t = civil(&cal, 2025, 7, 4, 9, 0, 0);
    let out = subtract(t, &[TimeUnit::Years(1), TimeUnit::Weeks(26)], &cal).unwrap();
    assert_eq!(wall_clock(&cal, out), "2024-01-04T09:00:00");
}

#[test]
fn mixed_units_in_one_call() {
    let cal = ZonedCalendar::utc();
    let t = Utc.with_ymd_and_hms(2026, 12, 31, 23, 0, 0).unwrap();
    let out = add(t, &[1.hours(), 30.minutes(), 15.seconds(), 1.days()], &cal).unwrap();
    assert_eq!(out, Utc.with_ymd_and_hms(2027, 1, 2, 0, 30, 15).unwrap());
}

#[test]
fn overflow_surfaces_as_out_of_range() {
    let cal = ZonedCalendar::utc();
    let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let err = add(t, &[TimeUnit::Years(300_000)], &cal).unwrap_err();
    assert!(matches!(err, CalendarError::OutOfRange(_)), "got: {err}");

    let err = add(t, &[TimeUnit::Weeks(i64::MAX)], &cal).unwrap_err();
    assert!(matches!(err, CalendarError::OutOfRange(_)), "got: {err}");

    let err = subtract(t, &[TimeUnit::Seconds(i64::MIN)], &cal).unwrap_err();
    assert!(matches!(err, CalendarError::OutOfRange(_)), "got: {err}");
}

#[test]
fn moment_walkthrough() {
    let cal = new_york();
    let now = civil(&cal, 2026, 3, 6, 16, 45, 0);

    let tomorrow_midnight = Moment::tomorrow(now, cal).unwrap().midnight().unwrap();
    assert_eq!(wall_clock(&cal, tomorrow_midnight.instant()), "2026-03-07T00:00:00");
    assert!(tomorrow_midnight.is_tomorrow(now));

    let yesterday_end = Moment::yesterday(now, cal).unwrap().end_of_day().unwrap();
    assert_eq!(wall_clock(&cal, yesterday_end.instant()), "2026-03-05T23:59:59");
    assert!(yesterday_end.is_yesterday(now));

    // Friday 2026-03-06 is the first Friday of March
    let today = Moment::today(now, cal);
    assert_eq!(today.nth_weekday(), 1);
    assert_eq!((today + 2.weeks()).nth_weekday(), 3);
    assert_eq!(today.full_date_string(), "Friday, March 6, 2026");
}
