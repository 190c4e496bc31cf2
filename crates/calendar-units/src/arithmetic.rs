//! Calendar-aware addition and subtraction of [`TimeUnit`]s.
//!
//! The engine folds an ordered slice of units into a [`ComponentDelta`] and
//! asks a [`CalendarService`] to apply it. It never converts units to a
//! fixed number of seconds, so `Days(1)` is always "same wall-clock time,
//! next civil day", even on a 23-hour DST day.
//!
//! ```
//! use calendar_units::arithmetic::{add, subtract};
//! use calendar_units::{TimeUnit, ZonedCalendar};
//! use chrono::{TimeZone, Utc};
//!
//! let cal = ZonedCalendar::utc();
//! let t = Utc.with_ymd_and_hms(2020, 1, 31, 10, 0, 0).unwrap();
//!
//! let later = add(t, &[TimeUnit::Years(1), TimeUnit::Hours(2)], &cal).unwrap();
//! assert_eq!(later, Utc.with_ymd_and_hms(2021, 1, 31, 12, 0, 0).unwrap());
//! assert_eq!(subtract(later, &[TimeUnit::Years(1), TimeUnit::Hours(2)], &cal).unwrap(), t);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarService;
use crate::error::{CalendarError, Result};
use crate::unit::{TimeUnit, UnitKind};

// ── Direction ───────────────────────────────────────────────────────────────

/// Whether units move an instant forward or backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

// ── ComponentDelta ──────────────────────────────────────────────────────────

/// A field of [`ComponentDelta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl UnitKind {
    /// The delta field this kind accumulates into, and how many of that
    /// field one unit is worth.
    pub fn delta_field(self) -> (DeltaField, i64) {
        match self {
            UnitKind::Seconds => (DeltaField::Second, 1),
            UnitKind::Minutes => (DeltaField::Minute, 1),
            UnitKind::Hours => (DeltaField::Hour, 1),
            UnitKind::Days => (DeltaField::Day, 1),
            UnitKind::Weeks => (DeltaField::Day, 7),
            UnitKind::Years => (DeltaField::Year, 1),
        }
    }
}

/// Signed per-field adjustments handed to
/// [`CalendarService::apply_delta`].
///
/// Units never produce a `month` delta; the field exists because calendar
/// hosts accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ComponentDelta {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl ComponentDelta {
    /// Fold `units` in order. Units targeting the same field add up, so
    /// `[Hours(2), Hours(3)]` folds to the same delta as `[Hours(5)]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if a field overflows `i64`.
    pub fn from_units(units: &[TimeUnit]) -> Result<Self> {
        let mut delta = ComponentDelta::default();
        for unit in units {
            delta.accumulate(*unit)?;
        }
        Ok(delta)
    }

    /// Add one unit's contribution to its field.
    pub fn accumulate(&mut self, unit: TimeUnit) -> Result<()> {
        let (field, factor) = unit.kind().delta_field();
        let current = self.get(field);
        let next = unit
            .magnitude()
            .checked_mul(factor)
            .and_then(|amount| current.checked_add(amount))
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!("adding {unit} overflows the {field:?} delta"))
            })?;
        *self.field_mut(field) = next;
        Ok(())
    }

    /// Every field negated.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if a field is `i64::MIN`.
    pub fn negated(&self) -> Result<Self> {
        let neg = |v: i64| {
            v.checked_neg()
                .ok_or_else(|| CalendarError::OutOfRange(format!("cannot negate {v}")))
        };
        Ok(ComponentDelta {
            year: neg(self.year)?,
            month: neg(self.month)?,
            day: neg(self.day)?,
            hour: neg(self.hour)?,
            minute: neg(self.minute)?,
            second: neg(self.second)?,
        })
    }

    pub fn get(&self, field: DeltaField) -> i64 {
        match field {
            DeltaField::Year => self.year,
            DeltaField::Month => self.month,
            DeltaField::Day => self.day,
            DeltaField::Hour => self.hour,
            DeltaField::Minute => self.minute,
            DeltaField::Second => self.second,
        }
    }

    fn field_mut(&mut self, field: DeltaField) -> &mut i64 {
        match field {
            DeltaField::Year => &mut self.year,
            DeltaField::Month => &mut self.month,
            DeltaField::Day => &mut self.day,
            DeltaField::Hour => &mut self.hour,
            DeltaField::Minute => &mut self.minute,
            DeltaField::Second => &mut self.second,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == ComponentDelta::default()
    }

    /// Whether the civil date moves (year, month or day is nonzero).
    pub fn has_date_part(&self) -> bool {
        self.year != 0 || self.month != 0 || self.day != 0
    }

    /// The hour, minute and second fields as elapsed seconds, or `None` on
    /// overflow.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.hour
            .checked_mul(3600)?
            .checked_add(self.minute.checked_mul(60)?)?
            .checked_add(self.second)
    }
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Move `point` by `units` in the given direction.
///
/// Subtraction is addition of the negated delta, so away from DST
/// transitions `add` followed by `subtract` of the same units returns the
/// original instant. An empty slice returns `point` unchanged.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the delta overflows or the
/// calendar cannot represent the result. Errors from the calendar are
/// passed through untouched.
pub fn apply<C: CalendarService + ?Sized>(
    point: DateTime<Utc>,
    units: &[TimeUnit],
    direction: Direction,
    calendar: &C,
) -> Result<DateTime<Utc>> {
    let delta = ComponentDelta::from_units(units)?;
    let delta = match direction {
        Direction::Add => delta,
        Direction::Subtract => delta.negated()?,
    };
    trace!("applying {delta:?} to {point}");
    calendar.apply_delta(point, &delta)
}

/// Add `units` to `point`. See [`apply`].
pub fn add<C: CalendarService + ?Sized>(
    point: DateTime<Utc>,
    units: &[TimeUnit],
    calendar: &C,
) -> Result<DateTime<Utc>> {
    apply(point, units, Direction::Add, calendar)
}

/// Subtract `units` from `point`. See [`apply`].
pub fn subtract<C: CalendarService + ?Sized>(
    point: DateTime<Utc>,
    units: &[TimeUnit],
    calendar: &C,
) -> Result<DateTime<Utc>> {
    apply(point, units, Direction::Subtract, calendar)
}

pub fn add_unit<C: CalendarService + ?Sized>(
    point: DateTime<Utc>,
    unit: TimeUnit,
    calendar: &C,
) -> Result<DateTime<Utc>> {
    add(point, &[unit], calendar)
}

pub fn subtract_unit<C: CalendarService + ?Sized>(
    point: DateTime<Utc>,
    unit: TimeUnit,
    calendar: &C,
) -> Result<DateTime<Utc>> {
    subtract(point, &[unit], calendar)
}

// ── Tests ───────────────────────────────────────────────────────────────────
