//! Shorthand constructors for tests.

use crate::{CanonicalDate, Day, Month, PersianDate, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid test year")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid test month")
}

pub fn day(value: u8, y: u16, m: u8) -> Day {
    Day::new(value, year(y), month(m)).expect("valid test day")
}

pub fn canonical(y: u16, m: u8, d: u8) -> CanonicalDate {
    CanonicalDate::new(y, m, d).expect("valid test date")
}

pub fn persian(y: u16, m: u8, d: u8) -> PersianDate {
    PersianDate::new(y, m, d).expect("valid test Persian date")
}
