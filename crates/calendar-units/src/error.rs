//! Error types for calendar-units operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The computed instant (or an intermediate delta) cannot be represented.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid components: {0}")]
    InvalidComponents(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Only produced under [`DstPolicy::Strict`](crate::calendar::DstPolicy::Strict).
    #[error("Nonexistent local time: {0}")]
    NonexistentLocalTime(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
