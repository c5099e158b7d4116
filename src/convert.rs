//! Gregorian ⇄ Persian conversion through a shared day number.
//!
//! Both calendars are mapped to the count of days since 1970-01-01. Only calendar
//! fields are involved, never instants, so local time zones cannot shift a date.

use crate::consts::{ANCHOR_GREGORIAN, ANCHOR_PERSIAN_YEAR, PERSIAN_COMMON_YEAR_DAYS};
use crate::gregorian::days_from_civil;
use crate::persian::{self, PersianDate};
use crate::{CanonicalDate, InvalidDateError};
use tracing::trace;

/// Day number of Persian 0001/01/01, placed so that 1402/01/01 falls on 2023-03-21.
const PERSIAN_EPOCH: i64 = days_from_civil(
    ANCHOR_GREGORIAN.0,
    ANCHOR_GREGORIAN.1,
    ANCHOR_GREGORIAN.2,
) - persian::days_before_year(ANCHOR_PERSIAN_YEAR);

/// Converts a canonical `YYYY-MM-DD` string to Persian fields.
///
/// # Errors
/// Returns `InvalidDateError::EmptyInput` for `""`, another `InvalidDateError` for any
/// string that is not a real Gregorian date, and `InvalidDateError::OutOfRange` for
/// dates before Persian year 1.
pub fn to_persian(gregorian: &str) -> Result<PersianDate, InvalidDateError> {
    gregorian.parse::<CanonicalDate>()?.to_persian()
}

/// Converts Persian fields to a canonical `YYYY-MM-DD` string.
///
/// The day is never clamped: a day past the end of its month is an error.
///
/// # Errors
/// Returns `InvalidDateError` if the triple is not a real Persian date or maps past
/// Gregorian year 9999.
pub fn to_gregorian(persian: PersianDate) -> Result<String, InvalidDateError> {
    Ok(persian.to_canonical()?.to_string())
}

impl CanonicalDate {
    /// The same day in the Persian calendar.
    ///
    /// # Errors
    /// Returns `InvalidDateError::OutOfRange` for dates before Persian year 1.
    pub fn to_persian(&self) -> Result<PersianDate, InvalidDateError> {
        let persian = PersianDate::from_day_number(self.day_number())
            .ok_or_else(|| InvalidDateError::OutOfRange(format!("{self} precedes Persian year 1")))?;
        trace!(gregorian = %self, persian = %persian, "converted to Persian");
        Ok(persian)
    }
}

impl PersianDate {
    /// The same day in the Gregorian calendar.
    ///
    /// # Errors
    /// See [`to_gregorian`].
    pub fn to_canonical(&self) -> Result<CanonicalDate, InvalidDateError> {
        self.validate()?;
        let gregorian = CanonicalDate::from_day_number(self.day_number())
            .map_err(|_| InvalidDateError::OutOfRange(format!("Persian date {self} is past 9999-12-31")))?;
        trace!(persian = %self, gregorian = %gregorian, "converted to Gregorian");
        Ok(gregorian)
    }

    /// Days since 1970-01-01. The triple must be valid.
    pub(crate) const fn day_number(&self) -> i64 {
        PERSIAN_EPOCH + persian::days_before_year(self.year) + self.day_of_year() as i64
    }

    /// Inverse of [`PersianDate::day_number`], `None` before 0001/01/01.
    pub(crate) fn from_day_number(days: i64) -> Option<Self> {
        let offset = days - PERSIAN_EPOCH;
        if offset < 0 {
            return None;
        }

        // No year is longer than 366 days, so this never overshoots
        let mut year = u16::try_from(offset / (i64::from(PERSIAN_COMMON_YEAR_DAYS) + 1) + 1).ok()?;
        while persian::days_before_year(year.checked_add(1)?) <= offset {
            year += 1;
        }

        let ordinal = u16::try_from(offset - persian::days_before_year(year)).ok()?;
        let (month, day) = persian::month_day_from_ordinal(ordinal);
        Some(Self { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persian::days_in_month;
    use crate::test_utils::{canonical, persian};

    #[test]
    fn test_nowruz_1402_fixed_point() {
        assert_eq!(to_gregorian(persian(1402, 1, 1)).unwrap(), "2023-03-21");
        assert_eq!(to_persian("2023-03-21").unwrap(), persian(1402, 1, 1));
    }

    #[test]
    fn test_known_pairs() {
        struct TestCase {
            gregorian:   &'static str,
            persian:     (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase { gregorian: "2023-08-03", persian: (1402, 5, 12), description: "mid Mordad" },
            TestCase { gregorian: "2024-03-19", persian: (1402, 12, 29), description: "last day of 1402" },
            TestCase { gregorian: "2024-03-20", persian: (1403, 1, 1), description: "Nowruz 1403" },
            TestCase { gregorian: "1988-03-28", persian: (1366, 12, 30), description: "leap Esfand 30" },
            TestCase { gregorian: "1988-03-29", persian: (1367, 1, 1), description: "after a leap year" },
            TestCase { gregorian: "2000-01-01", persian: (1378, 10, 5), description: "millennium" },
            TestCase { gregorian: "0623-02-13", persian: (1, 1, 1), description: "first Persian day" },
            TestCase { gregorian: "9999-12-31", persian: (9383, 11, 27), description: "last Gregorian day" },
        ];

        for case in &cases {
            let (y, m, d) = case.persian;
            assert_eq!(
                to_persian(case.gregorian).unwrap(),
                persian(y, m, d),
                "to_persian({}) ({})",
                case.gregorian,
                case.description
            );
            assert_eq!(
                to_gregorian(persian(y, m, d)).unwrap(),
                case.gregorian,
                "to_gregorian({y}/{m}/{d}) ({})",
                case.description
            );
        }
    }

    #[test]
    fn test_round_trip_from_persian_fields() {
        for y in 1300..=1450 {
            for m in 1..=12 {
                for d in 1..=days_in_month(y, m) {
                    let fields = PersianDate { year: y, month: m, day: d };
                    let gregorian = to_gregorian(fields).unwrap();
                    assert_eq!(to_persian(&gregorian).unwrap(), fields, "{fields} via {gregorian}");
                }
            }
        }
    }

    #[test]
    fn test_round_trip_from_gregorian_dates() {
        let first = canonical(1800, 1, 1).day_number();
        let last = canonical(2200, 12, 31).day_number();
        for n in first..=last {
            let date = CanonicalDate::from_day_number(n).unwrap();
            let fields = date.to_persian().unwrap();
            assert!(fields.validate().is_ok(), "{date} gave invalid {fields:?}");
            assert_eq!(fields.to_canonical().unwrap(), date);
            assert_eq!(to_gregorian(fields).unwrap(), date.to_string());
        }
    }

    #[test]
    fn test_consecutive_days_stay_consecutive() {
        let mut previous = persian(1365, 12, 29);
        let mut gregorian = previous.to_canonical().unwrap();
        for _ in 0..800 {
            gregorian = gregorian.add_days(1).unwrap();
            let next = gregorian.to_persian().unwrap();
            assert!(next > previous, "{next} should follow {previous}");
            previous = next;
        }
    }

    #[test]
    fn test_to_gregorian_does_not_clamp() {
        let result = to_gregorian(PersianDate { year: 1402, month: 12, day: 30 });
        assert!(matches!(
            result,
            Err(InvalidDateError::InvalidPersianDay { year: 1402, month: 12, day: 30, max: 29 })
        ));

        let result = to_gregorian(PersianDate { year: 1402, month: 7, day: 31 });
        assert!(matches!(result, Err(InvalidDateError::InvalidPersianDay { .. })));

        let result = to_gregorian(PersianDate { year: 1402, month: 0, day: 1 });
        assert!(matches!(result, Err(InvalidDateError::InvalidMonth(0))));
    }

    #[test]
    fn test_to_gregorian_rejects_day_zero() {
        let result = to_gregorian(PersianDate { year: 1402, month: 1, day: 0 });
        assert!(matches!(
            result,
            Err(InvalidDateError::InvalidPersianDay { day: 0, max: 31, .. })
        ));

        let result = to_gregorian(PersianDate { year: 0, month: 1, day: 1 });
        assert!(matches!(result, Err(InvalidDateError::InvalidYear(0))));
    }

    #[test]
    fn test_to_persian_requires_real_date() {
        assert!(matches!(to_persian(""), Err(InvalidDateError::EmptyInput)));
        assert!(matches!(to_persian("2023-02-29"), Err(InvalidDateError::InvalidDay { .. })));
        assert!(matches!(to_persian("1402/01/01"), Err(InvalidDateError::InvalidFormat(_))));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(to_persian("0623-02-12"), Err(InvalidDateError::OutOfRange(_))));
        assert!(matches!(to_persian("0001-01-01"), Err(InvalidDateError::OutOfRange(_))));
        assert!(matches!(
            to_gregorian(persian(9383, 11, 28)),
            Err(InvalidDateError::OutOfRange(_))
        ));
    }
}
