//! Year → month → day cascade behind the Persian date picker.

use crate::consts::{DEFAULT_YEARS_BACK, FARVARDIN, MAX_MONTH, MIN_DAY, PERSIAN_MONTH_NAMES};
use crate::{CanonicalDate, InvalidDateError, PersianDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    /// How many years before the current Persian year the picker offers
    pub years_back: u16,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            years_back: DEFAULT_YEARS_BACK,
        }
    }
}

/// Picker state for one date field.
///
/// The host owns the canonical string. The selector projects it to Persian fields,
/// lets the user change one field at a time, and hands back the new canonical date
/// after every change. Changing the year or month pulls the day back inside the
/// month, so the fields always form a real date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFieldSelector {
    fields: PersianDate,
    value:  Option<CanonicalDate>,
    years:  RangeInclusive<u16>,
}

impl DateFieldSelector {
    /// Creates a selector for the canonical string `initial`, where `""` means unset.
    ///
    /// The year window runs from `config.years_back` years before today's Persian year
    /// up to today's year. It is widened when the initial date lies outside it.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if `initial` is non-empty and not a real date, or if a
    /// date cannot be expressed in the Persian calendar.
    pub fn new(initial: &str, today: CanonicalDate, config: &SelectorConfig) -> Result<Self, InvalidDateError> {
        let current = today.to_persian()?.year;
        let first = current.saturating_sub(config.years_back).max(1);

        let mut selector = Self {
            fields: Self::default_fields(first, current),
            value:  None,
            years:  first..=current,
        };
        selector.set_value(initial)?;
        Ok(selector)
    }

    /// Middle of the window, first of Farvardin
    const fn default_fields(first: u16, last: u16) -> PersianDate {
        PersianDate {
            year:  first + (last - first) / 2,
            month: FARVARDIN,
            day:   MIN_DAY,
        }
    }

    /// Replaces the canonical value as a whole and re-projects the fields.
    ///
    /// `""` behaves like [`DateFieldSelector::clear`].
    ///
    /// # Errors
    /// Returns `InvalidDateError` if `canonical` is non-empty and not a real date.
    /// The selector is left unchanged in that case.
    pub fn set_value(&mut self, canonical: &str) -> Result<(), InvalidDateError> {
        let Some(date) = CanonicalDate::parse_optional(canonical)? else {
            self.clear();
            return Ok(());
        };

        let fields = date.to_persian()?;
        if !self.years.contains(&fields.year) {
            let first = (*self.years.start()).min(fields.year);
            let last = (*self.years.end()).max(fields.year);
            self.years = first..=last;
        }
        self.fields = fields;
        self.value = Some(date);
        Ok(())
    }

    /// Selects a year from [`DateFieldSelector::year_options`].
    ///
    /// # Errors
    /// Returns `InvalidDateError::OutOfRange` only if the date cannot be expressed in
    /// the Gregorian calendar.
    pub fn set_year(&mut self, year: u16) -> Result<CanonicalDate, InvalidDateError> {
        debug_assert!(self.years.contains(&year), "year {year} outside {:?}", self.years);

        self.fields.year = year.clamp(*self.years.start(), *self.years.end());
        self.clamp_day();
        self.emit()
    }

    /// Selects a month in `1..=12`.
    ///
    /// # Errors
    /// See [`DateFieldSelector::set_year`].
    pub fn set_month(&mut self, month: u8) -> Result<CanonicalDate, InvalidDateError> {
        debug_assert!((1..=MAX_MONTH).contains(&month), "month {month} outside 1-12");

        self.fields.month = month.clamp(FARVARDIN, MAX_MONTH);
        self.clamp_day();
        self.emit()
    }

    /// Selects a day from [`DateFieldSelector::day_options`].
    ///
    /// # Errors
    /// See [`DateFieldSelector::set_year`].
    pub fn set_day(&mut self, day: u8) -> Result<CanonicalDate, InvalidDateError> {
        let max = self.fields.days_in_month();
        debug_assert!((MIN_DAY..=max).contains(&day), "day {day} outside 1-{max}");

        self.fields.day = day.clamp(MIN_DAY, max);
        self.emit()
    }

    /// Unsets the value. The fields keep their last values so the next pick starts there.
    pub fn clear(&mut self) {
        self.value = None;
    }

    fn clamp_day(&mut self) {
        let max = self.fields.days_in_month();
        if self.fields.day > max {
            debug!(
                from = self.fields.day,
                to = max,
                year = self.fields.year,
                month = self.fields.month,
                "clamped picker day"
            );
            self.fields.day = max;
        }
    }

    fn emit(&mut self) -> Result<CanonicalDate, InvalidDateError> {
        let date = self.fields.to_canonical()?;
        self.value = Some(date);
        debug!(persian = %self.fields, canonical = %date, "picker value changed");
        Ok(date)
    }

    pub const fn fields(&self) -> PersianDate {
        self.fields
    }

    pub const fn value(&self) -> Option<CanonicalDate> {
        self.value
    }

    /// The canonical string for the host, `""` when unset
    pub fn canonical(&self) -> String {
        self.value.map_or_else(String::new, |date| date.to_string())
    }

    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn years(&self) -> RangeInclusive<u16> {
        self.years.clone()
    }

    /// Selectable years, newest first
    pub fn year_options(&self) -> Vec<u16> {
        self.years.clone().rev().collect()
    }

    /// Month numbers with their Persian names
    pub fn month_options(&self) -> Vec<(u8, &'static str)> {
        (FARVARDIN..=MAX_MONTH)
            .map(|m| (m, PERSIAN_MONTH_NAMES[m as usize]))
            .collect()
    }

    /// Days of the currently selected month
    pub const fn day_options(&self) -> RangeInclusive<u8> {
        MIN_DAY..=self.fields.days_in_month()
    }
}
