use crate::consts::{MAX_MONTH, MAX_YEAR};

/// Error raised when a string or field triple does not denote a real calendar date.
///
/// An unset date (the empty string) is reported as [`InvalidDateError::EmptyInput`] by
/// the converter; the formatter and the picker treat it as a regular state instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,

    /// The string is not shaped like `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside the supported range.
    #[error("Invalid year: {} (must be 1-{})", .0, MAX_YEAR)]
    InvalidYear(u16),

    /// Month outside `1..=12`.
    #[error("Invalid month: {} (must be 1-{})", .0, MAX_MONTH)]
    InvalidMonth(u8),

    /// Gregorian day that does not exist in its month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Persian day that does not exist in its month.
    #[error("Invalid day {day} for Persian month {year}/{month:02} (has {max} days)")]
    InvalidPersianDay { year: u16, month: u8, day: u8, max: u8 },

    /// The date exists but cannot be represented in the other calendar.
    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
}
