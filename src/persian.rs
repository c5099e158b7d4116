//! Persian (Jalali) calendar rules.
//!
//! Leap years follow the approximate rule `(year + 2346) mod 128 == 0`. It is not the
//! astronomical calendar, but every stored date and displayed age depends on it, so it
//! must stay as it is.

use crate::InvalidDateError;
use crate::consts::{
    CANONICAL_LEN, ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, FIRST_SHORT_MONTH_OFFSET,
    LAST_LONG_MONTH, LONG_MONTH_DAYS, MAX_MONTH, MIN_DAY, PERSIAN_COMMON_YEAR_DAYS,
    PERSIAN_LEAP_CYCLE, PERSIAN_LEAP_OFFSET, PERSIAN_MONTH_NAMES, PERSIAN_SEPARATOR,
    SHORT_MONTH_DAYS,
};
use crate::prelude::*;
use std::str::FromStr;

/// A Persian calendar date as a plain `(year, month, day)` triple.
///
/// The fields are public so a picker can hold intermediate values; a triple whose
/// day runs past the end of its month is rejected by [`PersianDate::new`] and by
/// conversion to the Gregorian calendar, never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}/{month:02}/{day:02}")]
pub struct PersianDate {
    pub year:  u16,
    pub month: u8,
    pub day:   u8,
}

impl PersianDate {
    /// Creates a validated Persian date.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the year is 0, the month is outside `1..=12`,
    /// or the day is past the end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Checks the triple against the calendar without modifying it.
    ///
    /// # Errors
    /// See [`PersianDate::new`].
    pub fn validate(&self) -> Result<(), InvalidDateError> {
        if self.year == 0 {
            return Err(InvalidDateError::InvalidYear(self.year));
        }
        if self.month == 0 || self.month > MAX_MONTH {
            return Err(InvalidDateError::InvalidMonth(self.month));
        }
        let max = days_in_month(self.year, self.month);
        if self.day < MIN_DAY || self.day > max {
            return Err(InvalidDateError::InvalidPersianDay {
                year: self.year,
                month: self.month,
                day: self.day,
                max,
            });
        }
        Ok(())
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Persian name of the month, e.g. `"مرداد"` for month 5
    pub const fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Zero-based position of the day within its year. The triple must be valid.
    pub(crate) const fn day_of_year(&self) -> u16 {
        day_of_year(self.month, self.day)
    }
}

/// Parses the `YYYY/MM/DD` form written by `Display`, ASCII digits only.
impl FromStr for PersianDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidDateError::EmptyInput);
        }

        let bytes = trimmed.as_bytes();
        let shaped = bytes.len() == CANONICAL_LEN
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => char::from(*b) == PERSIAN_SEPARATOR,
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(InvalidDateError::InvalidFormat(trimmed.to_owned()));
        }

        let invalid = |_| InvalidDateError::InvalidFormat(trimmed.to_owned());
        let year = trimmed[0..4].parse::<u16>().map_err(invalid)?;
        let month = trimmed[5..7].parse::<u8>().map_err(invalid)?;
        let day = trimmed[8..10].parse::<u8>().map_err(invalid)?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether Esfand of `year` has 30 days.
pub const fn is_leap_year(year: u16) -> bool {
    (year as u32 + PERSIAN_LEAP_OFFSET) % PERSIAN_LEAP_CYCLE == 0
}

/// Number of days in `month` of `year`.
///
/// `month` must be in `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month <= LAST_LONG_MONTH {
        LONG_MONTH_DAYS
    } else if month < ESFAND {
        SHORT_MONTH_DAYS
    } else if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        PERSIAN_COMMON_YEAR_DAYS + 1
    } else {
        PERSIAN_COMMON_YEAR_DAYS
    }
}

/// Days from 0001/01/01 to 1 Farvardin of `year`.
pub(crate) const fn days_before_year(year: u16) -> i64 {
    debug_assert!(year >= 1);

    let elapsed = year as i64 - 1;
    let offset = PERSIAN_LEAP_OFFSET as i64;
    let cycle = PERSIAN_LEAP_CYCLE as i64;
    // leap years among 1..=elapsed
    let leap_days = (elapsed + offset) / cycle - offset / cycle;
    elapsed * PERSIAN_COMMON_YEAR_DAYS as i64 + leap_days
}

pub(crate) const fn day_of_year(month: u8, day: u8) -> u16 {
    let month = month as u16;
    let before_month = if month <= LAST_LONG_MONTH as u16 {
        (month - 1) * LONG_MONTH_DAYS as u16
    } else {
        FIRST_SHORT_MONTH_OFFSET + (month - 1 - LAST_LONG_MONTH as u16) * SHORT_MONTH_DAYS as u16
    };
    before_month + day as u16 - 1
}

/// Inverse of [`day_of_year`]: `(month, day)` for a zero-based day of year.
pub(crate) const fn month_day_from_ordinal(ordinal: u16) -> (u8, u8) {
    if ordinal < FIRST_SHORT_MONTH_OFFSET {
        let long = LONG_MONTH_DAYS as u16;
        ((ordinal / long) as u8 + 1, (ordinal % long) as u8 + 1)
    } else {
        let short = SHORT_MONTH_DAYS as u16;
        let rest = ordinal - FIRST_SHORT_MONTH_OFFSET;
        ((rest / short) as u8 + LAST_LONG_MONTH + 1, (rest % short) as u8 + 1)
    }
}

pub const fn month_name(month: u8) -> &'static str {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    PERSIAN_MONTH_NAMES[month as usize]
}
