//! Persian display strings for canonical dates.

use crate::consts::{AGE_SUFFIX, PERSIAN_DIGITS, UNSET_PLACEHOLDER};
use crate::{CanonicalDate, InvalidDateError, PersianDate};
use tracing::warn;

/// Replaces ASCII digits with Persian digits, leaving everything else untouched.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| PERSIAN_DIGITS[d as usize]))
        .collect()
}

/// Renders a canonical date as a Persian date such as `۱۴۰۲/۰۵/۱۲`.
///
/// An unset date (`""`) renders as [`UNSET_PLACEHOLDER`].
///
/// # Errors
/// Returns `InvalidDateError` only for a non-empty string that is not a real date.
pub fn format(gregorian: &str) -> Result<String, InvalidDateError> {
    let Some(date) = parse_for_display(gregorian)? else {
        return Ok(UNSET_PLACEHOLDER.to_owned());
    };
    Ok(persian_numeric(&date.to_persian()?))
}

/// Renders a canonical date with the day and month name, such as `۱۲ مرداد ۱۴۰۲`.
///
/// # Errors
/// See [`format`].
pub fn format_long(gregorian: &str) -> Result<String, InvalidDateError> {
    let Some(date) = parse_for_display(gregorian)? else {
        return Ok(UNSET_PLACEHOLDER.to_owned());
    };
    let persian = date.to_persian()?;
    Ok(format!(
        "{} {} {}",
        to_persian_digits(&persian.day.to_string()),
        persian.month_name(),
        to_persian_digits(&persian.year.to_string())
    ))
}

/// Same as [`format_with_age_on`], measured against today's local date.
///
/// # Errors
/// See [`format`].
pub fn format_with_age(gregorian: &str) -> Result<String, InvalidDateError> {
    format_with_age_on(gregorian, CanonicalDate::today()?)
}

/// Renders a date followed by the number of full Persian years elapsed until `today`,
/// for example `۱۳۶۹/۰۲/۱۷ (۳۳ سال)`.
///
/// # Errors
/// See [`format`].
pub fn format_with_age_on(gregorian: &str, today: CanonicalDate) -> Result<String, InvalidDateError> {
    let Some(date) = parse_for_display(gregorian)? else {
        return Ok(UNSET_PLACEHOLDER.to_owned());
    };
    let birth = date.to_persian()?;
    let age = age_in_years(birth, today.to_persian()?);
    Ok(format!(
        "{} ({} {AGE_SUFFIX})",
        persian_numeric(&birth),
        to_persian_digits(&age.to_string())
    ))
}

/// Full years elapsed from `birth` to `today` in the Persian calendar.
///
/// The year difference drops by one while today's month and day come before the
/// birth month and day. Dates in the future count as age 0.
pub fn age_in_years(birth: PersianDate, today: PersianDate) -> u32 {
    let mut years = i32::from(today.year) - i32::from(birth.year);
    if (today.month, today.day) < (birth.month, birth.day) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

fn persian_numeric(date: &PersianDate) -> String {
    to_persian_digits(&date.to_string())
}

fn parse_for_display(gregorian: &str) -> Result<Option<CanonicalDate>, InvalidDateError> {
    CanonicalDate::parse_optional(gregorian)
        .inspect_err(|e| warn!(input = gregorian, error = %e, "cannot display malformed date"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{canonical, persian};

    #[test]
    fn test_persian_digits() {
        assert_eq!(to_persian_digits("1402/05/12"), "۱۴۰۲/۰۵/۱۲");
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits("km 12"), "km ۱۲");
    }

    #[test]
    fn test_format() {
        assert_eq!(format("2023-08-03").unwrap(), "۱۴۰۲/۰۵/۱۲");
        assert_eq!(format("2023-03-21").unwrap(), "۱۴۰۲/۰۱/۰۱");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long("2023-08-03").unwrap(), "۱۲ مرداد ۱۴۰۲");
        assert_eq!(format_long("").unwrap(), UNSET_PLACEHOLDER);
    }

    #[test]
    fn test_unset_renders_placeholder() {
        assert_eq!(format("").unwrap(), UNSET_PLACEHOLDER);
        assert_eq!(format_with_age("").unwrap(), UNSET_PLACEHOLDER);
        assert_eq!(format_with_age_on("", canonical(2023, 8, 3)).unwrap(), UNSET_PLACEHOLDER);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(format("2023-02-30"), Err(InvalidDateError::InvalidDay { .. })));
        assert!(matches!(format("garbage"), Err(InvalidDateError::InvalidFormat(_))));
        assert!(format_with_age("2023/08/03").is_err());
    }

    #[test]
    fn test_format_with_age_counts_full_years() {
        struct TestCase {
            today:       (u16, u8, u8),
            expected:    &'static str,
            description: &'static str,
        }

        // 1990-05-15 is 1369/02/17
        let cases = [
            TestCase { today: (2023, 5, 6), expected: "۱۳۶۹/۰۲/۱۷ (۳۲ سال)", description: "day before birthday" },
            TestCase { today: (2023, 5, 7), expected: "۱۳۶۹/۰۲/۱۷ (۳۳ سال)", description: "on birthday" },
            TestCase { today: (2023, 8, 3), expected: "۱۳۶۹/۰۲/۱۷ (۳۳ سال)", description: "after birthday" },
            TestCase { today: (2023, 3, 21), expected: "۱۳۶۹/۰۲/۱۷ (۳۲ سال)", description: "new year before birthday" },
        ];

        for case in &cases {
            let (y, m, d) = case.today;
            assert_eq!(
                format_with_age_on("1990-05-15", canonical(y, m, d)).unwrap(),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_age_in_years() {
        assert_eq!(age_in_years(persian(1369, 2, 17), persian(1402, 2, 17)), 33);
        assert_eq!(age_in_years(persian(1369, 2, 17), persian(1402, 2, 16)), 32);
        assert_eq!(age_in_years(persian(1369, 2, 17), persian(1369, 2, 17)), 0);
        assert_eq!(age_in_years(persian(1402, 1, 1), persian(1401, 12, 29)), 0);
        assert_eq!(age_in_years(persian(1366, 12, 30), persian(1367, 12, 29)), 0);
        assert_eq!(age_in_years(persian(1366, 12, 30), persian(1368, 1, 1)), 1);
    }
}
