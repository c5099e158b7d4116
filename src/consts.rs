/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month, shared by both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Canonical date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Length of a canonical date string
pub const CANONICAL_LEN: usize = 10;
/// Persian date component separator (`YYYY/MM/DD`)
pub const PERSIAN_SEPARATOR: char = '/';

/// Month number for Farvardin, the first Persian month
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the intercalary Persian month
pub const ESFAND: u8 = 12;
/// Last month with 31 days (Shahrivar)
pub const LAST_LONG_MONTH: u8 = 6;

/// Days in Farvardin..=Shahrivar
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in Mehr..=Bahman
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand outside a leap year
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in a common Persian year
pub const PERSIAN_COMMON_YEAR_DAYS: u16 = 365;
/// Day of year (zero based) on which Mehr begins
pub const FIRST_SHORT_MONTH_OFFSET: u16 = LAST_LONG_MONTH as u16 * LONG_MONTH_DAYS as u16;

/// Period of the approximate Persian leap rule
pub(crate) const PERSIAN_LEAP_CYCLE: u32 = 128;
/// Offset added to the year before taking it modulo [`PERSIAN_LEAP_CYCLE`]
pub(crate) const PERSIAN_LEAP_OFFSET: u32 = 2346;

/// Persian year whose first day anchors the conversion
pub const ANCHOR_PERSIAN_YEAR: u16 = 1402;
/// Gregorian date of 1402/01/01 (Nowruz)
pub const ANCHOR_GREGORIAN: (u16, u8, u8) = (2023, 3, 21);

/// Persian (Extended Arabic-Indic) digits, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Persian month names (index 0 is unused, months are 1-indexed)
pub const PERSIAN_MONTH_NAMES: [&str; 13] = [
    "",
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Suffix word following the age in `format_with_age`
pub const AGE_SUFFIX: &str = "سال";

/// Rendering of an unset date
pub const UNSET_PLACEHOLDER: &str = "";

/// A next-due date this many days away (or fewer) is due soon
pub const DUE_SOON_DAYS: u32 = 7;
/// A next-due mileage this many kilometres away (or fewer) is due soon
pub const DUE_SOON_DISTANCE: u32 = 500;

/// Default number of years the picker offers before the current year
pub const DEFAULT_YEARS_BACK: u16 = 120;
