//! Persian (Jalali) ⇄ Gregorian date engine for a vehicle maintenance tracker.
//!
//! Every date crossing the crate boundary is a [`CanonicalDate`], the Gregorian
//! `YYYY-MM-DD` string that is stored and sent to the API. Persian fields, display
//! strings and service reminder states are all derived from it on demand.

mod consts;
mod convert;
mod error;
mod format;
pub mod gregorian;
pub mod persian;
mod prelude;
mod records;
mod selector;
mod service;
#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{to_gregorian, to_persian};
pub use error::InvalidDateError;
pub use format::{age_in_years, format, format_long, format_with_age, format_with_age_on, to_persian_digits};
pub use gregorian::{Day, Month, Year};
pub use persian::{PersianDate, days_in_month, days_in_year, is_leap_year};
pub use records::{ServiceVisit, UserVehicle};
pub use selector::{DateFieldSelector, SelectorConfig};
pub use service::{
    DueStatus, DueThresholds, ServiceDueState, evaluate_service_due, evaluate_service_due_default,
    evaluate_service_due_str,
};

use crate::prelude::*;
use std::str::FromStr;

/// A real proleptic Gregorian date, written `YYYY-MM-DD`.
///
/// The string form is fixed width and zero padded, so comparing two canonical strings
/// lexicographically orders them the same way as comparing the dates. An unset date is
/// modelled as `Option::<CanonicalDate>::None` and written as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CanonicalDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CanonicalDate {
    /// Creates a date from raw Gregorian components.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if any component is out of range for the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Creates a date from validated parts
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Today's date according to the local clock.
    ///
    /// # Errors
    /// Returns `InvalidDateError::OutOfRange` if the clock reports a year outside `1..=9999`.
    pub fn today() -> Result<Self, InvalidDateError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Days elapsed since 1970-01-01 (negative before it)
    pub const fn day_number(&self) -> i64 {
        gregorian::days_from_civil(self.year(), self.month(), self.day())
    }

    /// Creates the date lying `days` after 1970-01-01.
    ///
    /// # Errors
    /// Returns `InvalidDateError::OutOfRange` if the date falls outside years `1..=9999`.
    pub fn from_day_number(days: i64) -> Result<Self, InvalidDateError> {
        let (year, month, day) = gregorian::civil_from_days(days);
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (1..=MAX_YEAR).contains(y))
            .ok_or_else(|| {
                InvalidDateError::OutOfRange(format!("Gregorian year {year} is outside 1-{MAX_YEAR}"))
            })?;
        Self::new(year, month, day)
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The date `days` days later (earlier when negative).
    ///
    /// # Errors
    /// Returns `InvalidDateError::OutOfRange` if the result leaves years `1..=9999`.
    pub fn add_days(&self, days: i64) -> Result<Self, InvalidDateError> {
        Self::from_day_number(self.day_number() + days)
    }

    /// Parses a canonical string where `""` means unset.
    ///
    /// # Errors
    /// Returns `InvalidDateError` for any non-empty string that is not a real date.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, InvalidDateError> {
        match s.parse::<Self>() {
            Ok(date) => Ok(Some(date)),
            Err(InvalidDateError::EmptyInput) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl FromStr for CanonicalDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidDateError::EmptyInput);
        }

        // Exactly YYYY-MM-DD; anything looser would break lexicographic ordering
        let bytes = trimmed.as_bytes();
        let shaped = bytes.len() == CANONICAL_LEN
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => char::from(*b) == DATE_SEPARATOR,
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(InvalidDateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_component::<u16>(&trimmed[0..4])?;
        let month = Self::parse_component::<u8>(&trimmed[5..7])?;
        let day = Self::parse_component::<u8>(&trimmed[8..10])?;

        Self::new(year, month, day)
    }
}

impl CanonicalDate {
    fn parse_component<T: FromStr>(s: &str) -> Result<T, InvalidDateError> {
        s.parse::<T>()
            .map_err(|_| InvalidDateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<chrono::NaiveDate> for CanonicalDate {
    type Error = InvalidDateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let out_of_range = || InvalidDateError::OutOfRange(date.to_string());
        let year = u16::try_from(date.year()).map_err(|_| out_of_range())?;
        let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;
        Self::new(year, month, day)
    }
}

impl From<CanonicalDate> for chrono::NaiveDate {
    fn from(date: CanonicalDate) -> Self {
        // chrono covers years 1..=9999, so the fallback is never taken
        Self::from_ymd_opt(i32::from(date.year()), u32::from(date.month()), u32::from(date.day()))
            .unwrap_or_default()
    }
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
