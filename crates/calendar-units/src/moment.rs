//! An instant bound to the calendar that interprets it.
//!
//! [`Moment`] is the ergonomic front of the crate: component getters,
//! day boundaries, "is this tomorrow?" checks, display strings and infix
//! `+`/`-` with [`TimeUnit`]s. Everything is a thin layer over a
//! [`CalendarService`] and the [`arithmetic`](crate::arithmetic) engine.
//!
//! Nothing here reads the system clock except [`Moment::now`]; the
//! relative-day helpers take the "now" anchor explicitly.
//!
//! ```
//! use calendar_units::{Moment, TimeUnitExt, ZonedCalendar};
//! use chrono::{TimeZone, Utc};
//!
//! let cal = ZonedCalendar::from_name("America/New_York").unwrap();
//! let now = Utc.with_ymd_and_hms(2026, 3, 16, 15, 0, 0).unwrap();
//!
//! let later = Moment::new(now, cal) + 2.days() - 3.hours();
//! assert_eq!(later.day(), 18);
//! assert_eq!(later.hour(), 8);
//! assert!(Moment::tomorrow(now, cal).unwrap().is_tomorrow(now));
//! ```

use std::ops::{Add, Sub};

use chrono::{DateTime, Utc, Weekday};

use crate::arithmetic;
use crate::calendar::{CalendarService, CivilDateTime, CivilFields, ZonedCalendar};
use crate::error::Result;
use crate::format::{DateFormatter, DateStyle};
use crate::unit::TimeUnit;

/// An instant paired with its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment<C = ZonedCalendar> {
    instant: DateTime<Utc>,
    calendar: C,
}

impl<C: CalendarService + Clone> Moment<C> {
    pub fn new(instant: DateTime<Utc>, calendar: C) -> Self {
        Moment { instant, calendar }
    }

    /// The current instant from the system clock.
    pub fn now(calendar: C) -> Self {
        Moment::new(Utc::now(), calendar)
    }

    pub fn today(now: DateTime<Utc>, calendar: C) -> Self {
        Moment::new(now, calendar)
    }

    /// `now` plus one calendar day.
    pub fn tomorrow(now: DateTime<Utc>, calendar: C) -> Result<Self> {
        Moment::today(now, calendar).add_unit(TimeUnit::Days(1))
    }

    /// `now` minus one calendar day.
    pub fn yesterday(now: DateTime<Utc>, calendar: C) -> Result<Self> {
        Moment::today(now, calendar).subtract_unit(TimeUnit::Days(1))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    fn with_instant(&self, instant: DateTime<Utc>) -> Self {
        Moment::new(instant, self.calendar.clone())
    }

    // ── arithmetic ──────────────────────────────────────────────────────

    pub fn add_units(&self, units: &[TimeUnit]) -> Result<Self> {
        arithmetic::add(self.instant, units, &self.calendar).map(|t| self.with_instant(t))
    }

    pub fn subtract_units(&self, units: &[TimeUnit]) -> Result<Self> {
        arithmetic::subtract(self.instant, units, &self.calendar).map(|t| self.with_instant(t))
    }

    pub fn add_unit(&self, unit: TimeUnit) -> Result<Self> {
        self.add_units(&[unit])
    }

    pub fn subtract_unit(&self, unit: TimeUnit) -> Result<Self> {
        self.subtract_units(&[unit])
    }

    // ── components ──────────────────────────────────────────────────────

    pub fn components(&self) -> CivilFields {
        self.calendar.components_of(self.instant)
    }

    pub fn year(&self) -> i32 {
        self.components().year()
    }

    pub fn month(&self) -> u32 {
        self.components().month()
    }

    pub fn day(&self) -> u32 {
        self.components().day()
    }

    pub fn weekday(&self) -> Weekday {
        self.components().weekday
    }

    /// Which occurrence of its weekday this day is within the month: the
    /// second Tuesday is `2`.
    pub fn nth_weekday(&self) -> u32 {
        self.components().weekday_ordinal
    }

    pub fn hour(&self) -> u32 {
        self.components().hour()
    }

    pub fn minute(&self) -> u32 {
        self.components().minute()
    }

    pub fn second(&self) -> u32 {
        self.components().second()
    }

    // ── day boundaries ──────────────────────────────────────────────────

    /// 00:00:00 on the same civil day.
    pub fn midnight(&self) -> Result<Self> {
        self.at_time_of_day(0, 0, 0)
    }

    pub fn start_of_day(&self) -> Result<Self> {
        self.midnight()
    }

    /// 23:59:59 on the same civil day.
    pub fn end_of_day(&self) -> Result<Self> {
        self.at_time_of_day(23, 59, 59)
    }

    fn at_time_of_day(&self, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let civil = CivilDateTime::on_day_of(&self.components(), hour, minute, second);
        self.calendar
            .from_components(&civil)
            .map(|t| self.with_instant(t))
    }

    // ── comparisons ─────────────────────────────────────────────────────

    /// Same civil year, month and day under this moment's calendar.
    pub fn equal_ignoring_time<D>(&self, other: &Moment<D>) -> bool {
        self.same_civil_day(other.instant)
    }

    pub fn is_today(&self, now: DateTime<Utc>) -> bool {
        self.same_civil_day(now)
    }

    pub fn is_tomorrow(&self, now: DateTime<Utc>) -> bool {
        arithmetic::add_unit(now, TimeUnit::Days(1), &self.calendar)
            .is_ok_and(|t| self.same_civil_day(t))
    }

    pub fn is_yesterday(&self, now: DateTime<Utc>) -> bool {
        arithmetic::subtract_unit(now, TimeUnit::Days(1), &self.calendar)
            .is_ok_and(|t| self.same_civil_day(t))
    }

    fn same_civil_day(&self, other: DateTime<Utc>) -> bool {
        self.components().date == self.calendar.components_of(other).date
    }

    // ── display ─────────────────────────────────────────────────────────

    pub fn date_string(&self, formatter: &DateFormatter) -> String {
        formatter.format(self.components().date)
    }

    pub fn short_date_string(&self) -> String {
        self.date_string(DateFormatter::shared(DateStyle::Short))
    }

    pub fn medium_date_string(&self) -> String {
        self.date_string(DateFormatter::shared(DateStyle::Medium))
    }

    pub fn full_date_string(&self) -> String {
        self.date_string(DateFormatter::shared(DateStyle::Full))
    }
}

impl<C: CalendarService + Clone> Add<TimeUnit> for Moment<C> {
    type Output = Moment<C>;

    /// # Panics
    ///
    /// Panics if the result is out of range. Use [`Moment::add_unit`] to
    /// get a `Result` instead.
    fn add(self, rhs: TimeUnit) -> Moment<C> {
        self.add_unit(rhs).expect("`Moment + TimeUnit` out of range")
    }
}

impl<C: CalendarService + Clone> Sub<TimeUnit> for Moment<C> {
    type Output = Moment<C>;

    /// # Panics
    ///
    /// Panics if the result is out of range. Use [`Moment::subtract_unit`]
    /// to get a `Result` instead.
    fn sub(self, rhs: TimeUnit) -> Moment<C> {
        self.subtract_unit(rhs)
            .expect("`Moment - TimeUnit` out of range")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
