//! Month-length math for the day ceiling.

use jiff::civil::Date;

/// Number of days in `(year, month)` under the proleptic Gregorian calendar.
///
/// Fail-soft: input outside the representable calendar range yields 31, so a
/// garbled mid-edit field never pins the ceiling below a committed day.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    let Ok(year) = i16::try_from(year) else {
        return 31;
    };
    let Ok(month) = i8::try_from(month) else {
        return 31;
    };
    Date::new(year, month, 1)
        .map(|date| i32::from(date.days_in_month()))
        .unwrap_or(31)
}

/// Build a calendar date from raw field values.
///
/// `None` when the triple does not name a real date (day 31 in February,
/// month 0 mid-edit, year outside the representable range).
pub fn date_from_parts(year: i32, month: i32, day: i32) -> Option<Date> {
    let year = i16::try_from(year).ok()?;
    let month = i8::try_from(month).ok()?;
    let day = i8::try_from(day).ok()?;
    Date::new(year, month, day).ok()
}
