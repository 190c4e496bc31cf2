//! The host calendar service.
//!
//! The arithmetic engine never does calendar math itself. It folds its
//! units into a [`ComponentDelta`] and hands that to a [`CalendarService`],
//! which owns every civil-calendar rule: month lengths, leap years, and
//! what happens when a wall-clock time lands inside a DST transition.
//!
//! [`ZonedCalendar`] is the provided implementation, backed by `chrono`
//! and the IANA database shipped in `chrono-tz`.
//!
//! # Delta semantics
//!
//! [`ZonedCalendar::apply_delta`] applies the fields largest first:
//!
//! 1. `year` and `month` move the civil date by whole months. The day of
//!    month is clamped to the last day of the target month, so Feb 29 plus
//!    one year is Feb 28.
//! 2. `day` moves the civil date by whole days, keeping the wall-clock time.
//!    Across a DST transition that is 23 or 25 elapsed hours, not 24.
//! 3. The shifted wall-clock time is resolved back to an instant through
//!    the calendar's [`DstPolicy`].
//! 4. `hour`, `minute` and `second` are added as elapsed time.

use chrono::{
    DateTime, Datelike, Days, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::arithmetic::ComponentDelta;
use crate::error::{CalendarError, Result};

// ── CalendarService ─────────────────────────────────────────────────────────

/// Civil-calendar capabilities the arithmetic engine depends on.
pub trait CalendarService {
    /// Decompose an instant into civil fields.
    fn components_of(&self, point: DateTime<Utc>) -> CivilFields;

    /// Apply a signed per-field delta with calendar-correct carry and borrow.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result cannot be
    /// represented. Implementations must never clamp or wrap instead.
    fn apply_delta(&self, point: DateTime<Utc>, delta: &ComponentDelta) -> Result<DateTime<Utc>>;

    /// Build an instant from explicit civil fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidComponents`] for impossible fields
    /// such as month 13 or April 31.
    fn from_components(&self, civil: &CivilDateTime) -> Result<DateTime<Utc>>;
}

impl<C: CalendarService + ?Sized> CalendarService for &C {
    fn components_of(&self, point: DateTime<Utc>) -> CivilFields {
        (**self).components_of(point)
    }

    fn apply_delta(&self, point: DateTime<Utc>, delta: &ComponentDelta) -> Result<DateTime<Utc>> {
        (**self).apply_delta(point, delta)
    }

    fn from_components(&self, civil: &CivilDateTime) -> Result<DateTime<Utc>> {
        (**self).from_components(civil)
    }
}

// ── Civil fields ────────────────────────────────────────────────────────────

/// An instant decomposed under a particular calendar and time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CivilFields {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub weekday: Weekday,
    /// Which occurrence of `weekday` this is within the month (1-5).
    pub weekday_ordinal: u32,
}

impl CivilFields {
    pub fn from_naive(local: NaiveDateTime) -> Self {
        let date = local.date();
        CivilFields {
            date,
            time: local.time(),
            weekday: date.weekday(),
            weekday_ordinal: (date.day() - 1) / 7 + 1,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }
}

/// Explicit civil fields for [`CalendarService::from_components`].
///
/// Unlike [`CivilFields`] these are raw integers and may be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        CivilDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The same civil day at a different wall-clock time.
    pub fn on_day_of(fields: &CivilFields, hour: u32, minute: u32, second: u32) -> Self {
        CivilDateTime::new(
            fields.year(),
            fields.month(),
            fields.day(),
            hour,
            minute,
            second,
        )
    }

    fn to_naive(self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| {
                CalendarError::InvalidComponents(format!(
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    self.year, self.month, self.day, self.hour, self.minute, self.second
                ))
            })
    }
}

// ── DST policy ──────────────────────────────────────────────────────────────

/// How a wall-clock time that falls inside a DST transition is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DstPolicy {
    /// Ambiguous times (fall back) resolve to the earlier instant. Times in
    /// a gap (spring forward) are read with the offset in force before the
    /// gap, which moves them forward by the gap length: 02:30 on a US
    /// spring-forward day becomes 03:30.
    #[default]
    Compatible,
    /// Both cases are an error.
    Strict,
}

// ── ZonedCalendar ───────────────────────────────────────────────────────────

/// A Gregorian calendar in one IANA time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedCalendar {
    tz: Tz,
    dst_policy: DstPolicy,
}

impl Default for ZonedCalendar {
    fn default() -> Self {
        ZonedCalendar::utc()
    }
}

impl ZonedCalendar {
    pub fn new(tz: Tz) -> Self {
        ZonedCalendar {
            tz,
            dst_policy: DstPolicy::default(),
        }
    }

    pub fn utc() -> Self {
        ZonedCalendar::new(Tz::UTC)
    }

    /// Look up a calendar by IANA time zone name (e.g. `"America/New_York"`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimezone`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(ZonedCalendar::new)
            .map_err(|_| CalendarError::InvalidTimezone(format!("'{}'", name)))
    }

    pub fn with_dst_policy(mut self, dst_policy: DstPolicy) -> Self {
        self.dst_policy = dst_policy;
        self
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn dst_policy(&self) -> DstPolicy {
        self.dst_policy
    }

    /// The instant `point` expressed in this calendar's zone.
    pub fn localize(&self, point: DateTime<Utc>) -> DateTime<Tz> {
        point.with_timezone(&self.tz)
    }

    /// Resolve a wall-clock time in this zone to an instant.
    fn resolve_local(&self, naive: &NaiveDateTime) -> Result<DateTime<Utc>> {
        match self.tz.from_local_datetime(naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => match self.dst_policy {
                DstPolicy::Compatible => {
                    trace!("{naive} is ambiguous in {}, picking {earliest}", self.tz);
                    Ok(earliest.with_timezone(&Utc))
                }
                DstPolicy::Strict => Err(CalendarError::NonexistentLocalTime(format!(
                    "{naive} is ambiguous in {}",
                    self.tz
                ))),
            },
            LocalResult::None => match self.dst_policy {
                DstPolicy::Compatible => self.resolve_in_gap(naive),
                DstPolicy::Strict => Err(CalendarError::NonexistentLocalTime(format!(
                    "{naive} does not exist in {}",
                    self.tz
                ))),
            },
        }
    }

    /// Read a wall-clock time that falls in a gap with the offset in force
    /// one day earlier.
    fn resolve_in_gap(&self, naive: &NaiveDateTime) -> Result<DateTime<Utc>> {
        let probe = naive
            .checked_sub_signed(TimeDelta::days(1))
            .ok_or_else(|| out_of_range(naive))?;
        let offset = self.tz.offset_from_utc_datetime(&probe).fix();
        let utc = naive
            .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
            .ok_or_else(|| out_of_range(naive))?;
        debug!("{naive} falls in a DST gap in {}, reading it as {offset}", self.tz);
        Ok(Utc.from_utc_datetime(&utc))
    }
}

impl CalendarService for ZonedCalendar {
    fn components_of(&self, point: DateTime<Utc>) -> CivilFields {
        CivilFields::from_naive(self.localize(point).naive_local())
    }

    fn apply_delta(&self, point: DateTime<Utc>, delta: &ComponentDelta) -> Result<DateTime<Utc>> {
        // A pure time delta must not round-trip through the wall clock, or an
        // instant in a DST fold would snap to the earlier occurrence.
        let shifted = if delta.has_date_part() {
            let local = self.localize(point).naive_local();
            let date = shift_date(local.date(), delta)?;
            self.resolve_local(&date.and_time(local.time()))?
        } else {
            point
        };

        let seconds = delta
            .elapsed_seconds()
            .ok_or_else(|| CalendarError::OutOfRange(format!("time part of {delta:?} overflows")))?;
        let step = TimeDelta::try_seconds(seconds)
            .ok_or_else(|| CalendarError::OutOfRange(format!("{seconds} seconds")))?;
        shifted
            .checked_add_signed(step)
            .ok_or_else(|| CalendarError::OutOfRange(format!("{shifted} + {seconds}s")))
    }

    fn from_components(&self, civil: &CivilDateTime) -> Result<DateTime<Utc>> {
        self.resolve_local(&civil.to_naive()?)
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Move a civil date by the year, month and day fields of `delta`.
fn shift_date(date: NaiveDate, delta: &ComponentDelta) -> Result<NaiveDate> {
    let overflow = || CalendarError::OutOfRange(format!("{date} shifted by {delta:?}"));

    let months = delta
        .year
        .checked_mul(12)
        .and_then(|m| m.checked_add(delta.month))
        .ok_or_else(overflow)?;
    let month_step = u32::try_from(months.unsigned_abs()).map_err(|_| overflow())?;
    let date = if months >= 0 {
        date.checked_add_months(Months::new(month_step))
    } else {
        date.checked_sub_months(Months::new(month_step))
    }
    .ok_or_else(overflow)?;

    let day_step = Days::new(delta.day.unsigned_abs());
    if delta.day >= 0 {
        date.checked_add_days(day_step)
    } else {
        date.checked_sub_days(day_step)
    }
    .ok_or_else(overflow)
}

fn out_of_range(naive: &NaiveDateTime) -> CalendarError {
    CalendarError::OutOfRange(format!("{naive}"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
