//! Signed quantities of a single calendar unit.
//!
//! A [`TimeUnit`] is the only input the arithmetic engine accepts: "5 days",
//! "-2 hours", "1 year". It carries exactly one unit kind and one integer
//! magnitude, so a malformed value cannot be constructed.
//!
//! ```
//! use calendar_units::{TimeUnit, TimeUnitExt};
//!
//! assert_eq!(5.days(), TimeUnit::Days(5));
//! assert_eq!((-1).years(), TimeUnit::Years(-1));
//! assert_eq!(TimeUnit::Hours(1).time_interval(), 3600.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed quantity of one calendar unit. Negative magnitudes point into
/// the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Years(i64),
}

/// The unit kind of a [`TimeUnit`], without its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitKind {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

impl UnitKind {
    /// Every unit kind, smallest first.
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Seconds,
        UnitKind::Minutes,
        UnitKind::Hours,
        UnitKind::Days,
        UnitKind::Weeks,
        UnitKind::Years,
    ];

    fn name(self, plural: bool) -> &'static str {
        let (one, many) = match self {
            UnitKind::Seconds => ("second", "seconds"),
            UnitKind::Minutes => ("minute", "minutes"),
            UnitKind::Hours => ("hour", "hours"),
            UnitKind::Days => ("day", "days"),
            UnitKind::Weeks => ("week", "weeks"),
            UnitKind::Years => ("year", "years"),
        };
        if plural {
            many
        } else {
            one
        }
    }
}

impl TimeUnit {
    /// Build a unit of the given kind.
    pub fn new(kind: UnitKind, magnitude: i64) -> Self {
        match kind {
            UnitKind::Seconds => TimeUnit::Seconds(magnitude),
            UnitKind::Minutes => TimeUnit::Minutes(magnitude),
            UnitKind::Hours => TimeUnit::Hours(magnitude),
            UnitKind::Days => TimeUnit::Days(magnitude),
            UnitKind::Weeks => TimeUnit::Weeks(magnitude),
            UnitKind::Years => TimeUnit::Years(magnitude),
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            TimeUnit::Seconds(_) => UnitKind::Seconds,
            TimeUnit::Minutes(_) => UnitKind::Minutes,
            TimeUnit::Hours(_) => UnitKind::Hours,
            TimeUnit::Days(_) => UnitKind::Days,
            TimeUnit::Weeks(_) => UnitKind::Weeks,
            TimeUnit::Years(_) => UnitKind::Years,
        }
    }

    pub fn magnitude(&self) -> i64 {
        match *self {
            TimeUnit::Seconds(n)
            | TimeUnit::Minutes(n)
            | TimeUnit::Hours(n)
            | TimeUnit::Days(n)
            | TimeUnit::Weeks(n)
            | TimeUnit::Years(n) => n,
        }
    }

    /// A fixed-length estimate of this unit, in seconds.
    ///
    /// Built compositionally: an hour is 60 minutes, a day 24 hours, a week
    /// 7 days and a year 365 days. Leap years, DST transitions and month
    /// lengths are ignored, so this is only suitable for rough interval
    /// estimates. Calendar-correct arithmetic goes through
    /// [`add`](crate::arithmetic::add) instead.
    pub fn time_interval(&self) -> f64 {
        match *self {
            TimeUnit::Seconds(n) => n as f64,
            TimeUnit::Minutes(n) => n as f64 * 60.0,
            TimeUnit::Hours(n) => n as f64 * TimeUnit::Minutes(60).time_interval(),
            TimeUnit::Days(n) => n as f64 * TimeUnit::Hours(24).time_interval(),
            TimeUnit::Weeks(n) => n as f64 * TimeUnit::Days(7).time_interval(),
            TimeUnit::Years(n) => n as f64 * TimeUnit::Days(365).time_interval(),
        }
    }
}

impl std::ops::Neg for TimeUnit {
    type Output = Self;

    /// Flip the direction of the unit.
    ///
    /// Panics on `i64::MIN`, the same way integer negation does.
    fn neg(self) -> Self {
        TimeUnit::new(self.kind(), -self.magnitude())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.magnitude();
        write!(f, "{} {}", n, self.kind().name(n.unsigned_abs() != 1))
    }
}

/// Integer projections onto [`TimeUnit`]: `3.days()`, `(-1).years()`.
///
/// Each method is identical to calling the matching constructor.
pub trait TimeUnitExt {
    fn seconds(self) -> TimeUnit;
    fn minutes(self) -> TimeUnit;
    fn hours(self) -> TimeUnit;
    fn days(self) -> TimeUnit;
    fn weeks(self) -> TimeUnit;
    fn years(self) -> TimeUnit;
}

macro_rules! impl_time_unit_ext {
    ($($ty:ty),*) => {
        $(
            impl TimeUnitExt for $ty {
                fn seconds(self) -> TimeUnit {
                    TimeUnit::Seconds(i64::from(self))
                }
                fn minutes(self) -> TimeUnit {
                    TimeUnit::Minutes(i64::from(self))
                }
                fn hours(self) -> TimeUnit {
                    TimeUnit::Hours(i64::from(self))
                }
                fn days(self) -> TimeUnit {
                    TimeUnit::Days(i64::from(self))
                }
                fn weeks(self) -> TimeUnit {
                    TimeUnit::Weeks(i64::from(self))
                }
                fn years(self) -> TimeUnit {
                    TimeUnit::Years(i64::from(self))
                }
            }
        )*
    };
}

impl_time_unit_ext!(i8, i16, i32, i64, u8, u16, u32);

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_minutes_and_seconds() {
        assert_eq!(TimeUnit::Seconds(45).time_interval(), 45.0);
        assert_eq!(TimeUnit::Minutes(1).time_interval(), 60.0);
        assert_eq!(TimeUnit::Minutes(-2).time_interval(), -120.0);
    }

    #[test]
    fn test_interval_is_compositional() {
        let minute = TimeUnit::Minutes(1).time_interval();
        let hour = TimeUnit::Hours(1).time_interval();
        let day = TimeUnit::Days(1).time_interval();
        assert_eq!(hour, 60.0 * minute);
        assert_eq!(day, 24.0 * hour);
        assert_eq!(TimeUnit::Weeks(1).time_interval(), 7.0 * day);
        assert_eq!(TimeUnit::Years(1).time_interval(), 365.0 * day);
    }

    #[test]
    fn test_interval_year_ignores_leap_days() {
        // 365 days, never 366
        assert_eq!(TimeUnit::Years(4).time_interval(), 4.0 * 365.0 * 86400.0);
    }

    #[test]
    fn test_interval_zero() {
        for kind in UnitKind::ALL {
            assert_eq!(TimeUnit::new(kind, 0).time_interval(), 0.0);
        }
    }

    #[test]
    fn test_integer_projections_match_constructors() {
        assert_eq!(7.seconds(), TimeUnit::Seconds(7));
        assert_eq!(30.minutes(), TimeUnit::Minutes(30));
        assert_eq!((-3).hours(), TimeUnit::Hours(-3));
        assert_eq!(1.days(), TimeUnit::Days(1));
        assert_eq!(2u8.weeks(), TimeUnit::Weeks(2));
        assert_eq!(5i64.years(), TimeUnit::Years(5));
    }

    #[test]
    fn test_kind_and_magnitude_round_trip() {
        for kind in UnitKind::ALL {
            let unit = TimeUnit::new(kind, -9);
            assert_eq!(unit.kind(), kind);
            assert_eq!(unit.magnitude(), -9);
        }
    }

    #[test]
    fn test_neg_flips_magnitude() {
        assert_eq!(-TimeUnit::Weeks(3), TimeUnit::Weeks(-3));
        assert_eq!(-TimeUnit::Seconds(0), TimeUnit::Seconds(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeUnit::Days(5).to_string(), "5 days");
        assert_eq!(TimeUnit::Weeks(1).to_string(), "1 week");
        assert_eq!(TimeUnit::Hours(-1).to_string(), "-1 hour");
        assert_eq!(TimeUnit::Years(0).to_string(), "0 years");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_string(&TimeUnit::Days(3)).unwrap();
        assert_eq!(json, r#"{"Days":3}"#);
        let back: TimeUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TimeUnit::Days(3));
    }
}
