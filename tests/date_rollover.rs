//! Spin-driven rollover behavior of the composite date field.

mod common;

use common::picker_at;
use datespin::picker::DatePart;
use datespin::spinner::SpinDirection;
use jiff::civil::date;

#[test]
fn day_up_mid_month_just_increments() {
    let mut picker = picker_at(2023, 6, 14);
    picker.spin(DatePart::Day, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2023, 6, 15)));
}

#[test]
fn day_up_past_month_end_rolls_into_next_month() {
    let mut picker = picker_at(2023, 1, 31);
    picker.spin(DatePart::Day, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2023, 2, 1)));
}

#[test]
fn day_up_past_short_month_end_rolls_too() {
    let mut picker = picker_at(2023, 2, 28);
    picker.spin(DatePart::Day, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2023, 3, 1)));
}

#[test]
fn day_up_from_december_last_day_rolls_the_year() {
    let mut picker = picker_at(2023, 12, 31);
    picker.spin(DatePart::Day, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2024, 1, 1)));
}

#[test]
fn day_up_from_december_last_day_at_max_year_stays_put() {
    // test clock pins the year ceiling to 2027
    let mut picker = picker_at(2027, 12, 31);
    picker.spin(DatePart::Day, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2027, 12, 31)));
}

#[test]
fn day_down_rolls_into_previous_month_last_day() {
    let mut picker = picker_at(2023, 5, 1);
    picker.spin(DatePart::Day, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2023, 4, 30)));
}

#[test]
fn day_down_into_february_lands_on_leap_day() {
    let mut picker = picker_at(2024, 3, 1);
    picker.spin(DatePart::Day, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2024, 2, 29)));
}

#[test]
fn day_down_from_january_first_rolls_into_previous_year() {
    let mut picker = picker_at(2023, 1, 1);
    picker.spin(DatePart::Day, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2022, 12, 31)));
}

#[test]
fn day_down_at_min_year_clamps_in_place() {
    let mut picker = picker_at(2010, 1, 1);
    picker.spin(DatePart::Day, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2010, 1, 1)));
}

#[test]
fn month_up_mid_year_just_increments() {
    let mut picker = picker_at(2023, 6, 14);
    picker.spin(DatePart::Month, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2023, 7, 14)));
}

#[test]
fn month_up_past_december_rolls_the_year() {
    let mut picker = picker_at(2023, 12, 15);
    picker.spin(DatePart::Month, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2024, 1, 15)));
}

#[test]
fn month_up_past_december_at_max_year_stays_put() {
    let mut picker = picker_at(2027, 12, 15);
    picker.spin(DatePart::Month, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2027, 12, 15)));
}

#[test]
fn month_down_from_january_rolls_into_previous_year() {
    let mut picker = picker_at(2023, 1, 15);
    picker.spin(DatePart::Month, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2022, 12, 15)));
}

#[test]
fn month_down_from_january_at_min_year_stays_put() {
    let mut picker = picker_at(2010, 1, 15);
    picker.spin(DatePart::Month, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2010, 1, 15)));
}

#[test]
fn month_down_reclamps_day_to_shorter_month() {
    let mut picker = picker_at(2024, 3, 31);
    picker.spin(DatePart::Month, SpinDirection::Down);
    // 2024 is a leap year: 31 truncates to 29, not 28
    assert_eq!(picker.date(), Some(date(2024, 2, 29)));
}

#[test]
fn month_up_keeps_day_subject_to_reclamp() {
    let mut picker = picker_at(2023, 1, 31);
    picker.spin(DatePart::Month, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2023, 2, 28)));
}

#[test]
fn year_spin_up_reclamps_leap_day() {
    let mut picker = picker_at(2024, 2, 29);
    picker.spin(DatePart::Year, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2025, 2, 28)));
}

#[test]
fn year_spin_never_rolls_over() {
    let mut picker = picker_at(2027, 7, 4);
    picker.spin(DatePart::Year, SpinDirection::Up);
    assert_eq!(picker.date(), Some(date(2027, 7, 4)));

    let mut picker = picker_at(2010, 7, 4);
    picker.spin(DatePart::Year, SpinDirection::Down);
    assert_eq!(picker.date(), Some(date(2010, 7, 4)));
}
