//! Shared fixtures for the date picker integration tests.

#![allow(dead_code)]

use datespin::clock::FixedClock;
use datespin::picker::{DatePicker, DatePickerOptions};
use jiff::civil::{date, Date};

/// Default option floor in [`DatePickerOptions`].
pub const MIN_YEAR: i32 = 2010;

/// Fixed "today" used across tests: year bounds become [2010, 2027].
pub fn test_clock() -> FixedClock {
    FixedClock(date(2026, 6, 15))
}

/// Picker seeded at a specific date, with default options otherwise.
pub fn picker_at(year: i16, month: i8, day: i8) -> DatePicker {
    picker_with(date(year, month, day), MIN_YEAR)
}

pub fn picker_with(initial: Date, min_year: i32) -> DatePicker {
    DatePicker::new(
        DatePickerOptions {
            min_year,
            initial: Some(initial),
            ..Default::default()
        },
        &test_clock(),
    )
}
