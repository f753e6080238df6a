//! Contract tests for the bounded integer field.

mod common;

use datespin::spinner::{NumberSpinner, SpinDirection, SpinnerEvent};

#[test]
fn constrain_lands_in_bounds_for_any_value() {
    let mut spinner = NumberSpinner::new(1, 31, 15);
    for value in -50..=150 {
        spinner.set_value_silent(value);
        let _ = spinner.constrain();
        assert!(
            (1..=31).contains(&spinner.value()),
            "constrain({value}) left {}",
            spinner.value()
        );
    }
}

#[test]
fn constrain_is_idempotent() {
    let mut spinner = NumberSpinner::new(1, 31, 15);
    for value in -50..=150 {
        spinner.set_value_silent(value);
        let _ = spinner.constrain();
        let settled = spinner.value();
        assert_eq!(spinner.constrain(), None, "second constrain({value}) acted");
        assert_eq!(spinner.value(), settled);
    }
}

#[test]
fn spin_sequence_walks_the_range() {
    let mut spinner = NumberSpinner::new(1, 3, 1);
    spinner.spin(SpinDirection::Up);
    spinner.spin(SpinDirection::Up);
    assert_eq!(spinner.value(), 3);

    // at the bound: the value holds, the transient still reports the crossing
    let events = spinner.spin(SpinDirection::Up);
    assert_eq!(spinner.value(), 3);
    assert_eq!(
        events,
        vec![SpinnerEvent::SpinAttempt {
            direction: SpinDirection::Up,
            transient: 4
        }]
    );
}

#[test]
fn committed_spin_reports_change_then_attempt() {
    let mut spinner = NumberSpinner::new(1, 12, 6);
    let events = spinner.spin(SpinDirection::Down);
    assert_eq!(
        events,
        vec![
            SpinnerEvent::ValueChanged { value: 5 },
            SpinnerEvent::SpinAttempt {
                direction: SpinDirection::Down,
                transient: 5
            },
        ]
    );
}

#[test]
fn garbage_text_is_effectively_min() {
    let mut spinner = NumberSpinner::new(1, 31, 15);
    let _ = spinner.set_text("x9");
    assert_eq!(spinner.value(), 1);
    assert!(spinner.is_valid());
}

#[test]
fn spin_from_empty_buffer_starts_at_min() {
    let mut spinner = NumberSpinner::new(1, 31, 15);
    let _ = spinner.set_text("");
    spinner.spin(SpinDirection::Up);
    assert_eq!(spinner.value(), 2);
}

#[test]
fn retuned_max_constrains_on_demand_only() {
    let mut spinner = NumberSpinner::new(1, 31, 31);
    spinner.set_max(28);
    // set_max alone leaves the value; the owner decides when to clamp
    assert_eq!(spinner.value(), 31);
    assert_eq!(
        spinner.constrain(),
        Some(SpinnerEvent::ValueChanged { value: 28 })
    );
}
