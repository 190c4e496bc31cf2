//! # calendar-units
//!
//! Calendar-aware date arithmetic.
//!
//! Add "3 days", "2 weeks" or "1 year" to an instant and get the answer a
//! person expects: the same wall-clock time on the right civil day, with
//! month lengths, leap years and DST transitions handled by the calendar
//! rather than by multiplying seconds.
//!
//! ## Modules
//!
//! - [`unit`] — `TimeUnit`, a signed quantity of seconds/minutes/hours/days/weeks/years
//! - [`arithmetic`] — fold units into a component delta and apply it through a calendar
//! - [`calendar`] — the `CalendarService` trait and the `chrono-tz` backed `ZonedCalendar`
//! - [`moment`] — an instant bound to its calendar: getters, day boundaries, infix `+`/`-`
//! - [`format`] — short/medium/full date strings
//! - [`error`] — Error types
//!
//! ## Features
//!
//! - `logging` — emit `log` records from the engine and the calendar host

#[macro_use]
mod logging;

pub mod arithmetic;
pub mod calendar;
pub mod error;
pub mod format;
pub mod moment;
pub mod unit;

pub use arithmetic::{
    add, add_unit, apply, subtract, subtract_unit, ComponentDelta, DeltaField, Direction,
};
pub use calendar::{CalendarService, CivilDateTime, CivilFields, DstPolicy, ZonedCalendar};
pub use error::CalendarError;
pub use format::{DateFormatter, DateStyle};
pub use moment::Moment;
pub use unit::{TimeUnit, TimeUnitExt, UnitKind};
