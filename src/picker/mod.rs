//! Composite date field: three bounded spinners acting as one calendar date.
//!
//! The [`DatePicker`] owns a day, month, and year [`NumberSpinner`] and
//! routes their notifications through its rollover rules:
//!
//! - spinning day past the month's last day rolls into the next month (and,
//!   from December's last day, into the next year);
//! - spinning day below 1 rolls into the previous month (and, from January,
//!   into the previous year, or clamps in place at the minimum year);
//! - spinning month past 12 or below 1 rolls the year;
//! - any committed month or year change re-clamps the day against the new
//!   month length (Jan 31 → Feb 28).
//!
//! Dispatch is synchronous and depth-first: each assignment made inside a
//! rule is fully handled, including the day-ceiling recompute, before the
//! rule's next assignment runs. Several rules depend on that ordering (the
//! previous-month rules read `day.max` *after* the month assignment has
//! landed).

use jiff::civil::Date;

use crate::calendar;
use crate::clock::Clock;
use crate::spinner::{NumberSpinner, SpinDirection, SpinnerEvent};

/// Role of a child field within the composite, carried on every routed
/// event and on outgoing [`PartChanged`] notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Day,
    Month,
    Year,
}

impl DatePart {
    pub const fn name(self) -> &'static str {
        match self {
            DatePart::Day => "day",
            DatePart::Month => "month",
            DatePart::Year => "year",
        }
    }

    /// Focus order: day → month → year → day.
    pub const fn next(self) -> DatePart {
        match self {
            DatePart::Day => DatePart::Month,
            DatePart::Month => DatePart::Year,
            DatePart::Year => DatePart::Day,
        }
    }

    pub const fn prev(self) -> DatePart {
        match self {
            DatePart::Day => DatePart::Year,
            DatePart::Month => DatePart::Day,
            DatePart::Year => DatePart::Month,
        }
    }
}

/// Consolidated change notification delivered to the picker's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartChanged {
    pub part: DatePart,
    pub value: i32,
}

/// Construction parameters for a [`DatePicker`].
#[derive(Debug, Clone)]
pub struct DatePickerOptions {
    /// Display label; opaque to the picker logic.
    pub label: String,
    /// Lowest year the year field accepts. The ceiling is always the
    /// clock's current year + 1.
    pub min_year: i32,
    /// Initial date; the clock's today when absent.
    pub initial: Option<Date>,
    /// Opaque pass-through for the rendering layer; the rollover logic
    /// never consults it.
    pub disabled: bool,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            label: "Input".to_string(),
            min_year: 2010,
            initial: None,
            disabled: false,
        }
    }
}

type ChangeListener = Box<dyn FnMut(PartChanged)>;

/// Three linked spinners (day, month, year) behaving as a single calendar
/// date editor. See the module docs for the rollover rules.
pub struct DatePicker {
    label: String,
    disabled: bool,
    day: NumberSpinner,
    month: NumberSpinner,
    year: NumberSpinner,
    listener: Option<ChangeListener>,
}

impl DatePicker {
    pub fn new(options: DatePickerOptions, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let initial = options.initial.unwrap_or(today);
        let max_year = i32::from(today.year()) + 1;
        let mut picker = Self {
            label: options.label,
            disabled: options.disabled,
            day: NumberSpinner::new(1, 31, i32::from(initial.day())),
            month: NumberSpinner::new(1, 12, i32::from(initial.month())),
            year: NumberSpinner::new(options.min_year, max_year, i32::from(initial.year())),
            listener: None,
        };
        // Establish the day ceiling for the initial month; clamps the day
        // when the initial year fell outside [min_year, max_year] and got
        // pulled to a bound with a shorter February.
        picker.reclamp_day();
        picker
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Register the external change listener. Invoked once per committed
    /// part change, mid-dispatch, in the order the changes happen.
    pub fn on_change(&mut self, listener: impl FnMut(PartChanged) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Read access to a child field, for rendering.
    pub fn spinner(&self, part: DatePart) -> &NumberSpinner {
        match part {
            DatePart::Day => &self.day,
            DatePart::Month => &self.month,
            DatePart::Year => &self.year,
        }
    }

    pub fn part_value(&self, part: DatePart) -> i32 {
        self.spinner(part).value()
    }

    /// Spin one of the child fields and apply any rollover that the
    /// boundary crossing warrants.
    pub fn spin(&mut self, part: DatePart, direction: SpinDirection) {
        let events = self.spinner_mut(part).spin(direction);
        self.route(part, events);
    }

    /// Typed-edit pass-through. The caller is responsible for digit
    /// filtering; month/year edits re-clamp the day exactly like spins do.
    pub fn input(&mut self, part: DatePart, text: &str) {
        let events = self.spinner_mut(part).set_text(text);
        self.route(part, events);
    }

    /// Focus left a child field: empty buffers reset to the field minimum,
    /// anything else is constrained into bounds.
    pub fn blur(&mut self, part: DatePart) {
        let events = self.spinner_mut(part).on_blur();
        self.route(part, events);
    }

    /// The current calendar date, or `None` while the triple does not name
    /// a real date (transient states during rollover and mid-edit garbage
    /// are allowed to be briefly invalid).
    pub fn date(&self) -> Option<Date> {
        calendar::date_from_parts(
            self.year.value(),
            self.month.value(),
            self.day.value(),
        )
    }

    /// Assign a full date. Year lands first: under depth-first dispatch the
    /// day ceiling must be recomputed for the target year and month before
    /// the day value arrives, or leap days would truncate on the way in.
    pub fn set_date(&mut self, date: Date) {
        self.assign(DatePart::Year, i32::from(date.year()));
        self.assign(DatePart::Month, i32::from(date.month()));
        self.assign(DatePart::Day, i32::from(date.day()));
    }

    fn spinner_mut(&mut self, part: DatePart) -> &mut NumberSpinner {
        match part {
            DatePart::Day => &mut self.day,
            DatePart::Month => &mut self.month,
            DatePart::Year => &mut self.year,
        }
    }

    /// Direct assignment to a child field, routed like any other change.
    fn assign(&mut self, part: DatePart, value: i32) {
        let events = self.spinner_mut(part).set_value(value);
        self.route(part, events);
    }

    /// Deliver a child field's events to the composite handlers, in order.
    fn route(&mut self, part: DatePart, events: Vec<SpinnerEvent>) {
        for event in events {
            match event {
                SpinnerEvent::ValueChanged { value } => self.on_value_changed(part, value),
                SpinnerEvent::SpinAttempt { transient, .. } => {
                    self.on_spin_attempt(part, transient);
                }
            }
        }
    }

    fn on_value_changed(&mut self, part: DatePart, value: i32) {
        self.emit(PartChanged { part, value });
        if matches!(part, DatePart::Month | DatePart::Year) {
            self.reclamp_day();
        }
    }

    /// Rollover rules. At most one rule fires per spin attempt; the order
    /// of the checks decides which rule wins at calendar boundaries and
    /// must not be reordered. Year spins never roll over.
    fn on_spin_attempt(&mut self, part: DatePart, transient: i32) {
        match part {
            DatePart::Year => {}
            DatePart::Month => self.month_spin_attempt(transient),
            DatePart::Day => self.day_spin_attempt(transient),
        }
    }

    fn month_spin_attempt(&mut self, transient: i32) {
        if transient > self.month.max() && self.year.value() < self.year.max() {
            tracing::debug!(year = self.year.value() + 1, "month overflow rolls the year");
            self.assign(DatePart::Year, self.year.value() + 1);
            self.assign(DatePart::Month, self.month.min());
        } else if transient < self.month.min() && self.year.value() > self.year.min() {
            tracing::debug!(year = self.year.value() - 1, "month underflow rolls the year");
            self.assign(DatePart::Year, self.year.value() - 1);
            self.assign(DatePart::Month, self.month.max());
        }
    }

    fn day_spin_attempt(&mut self, transient: i32) {
        let month = self.month.value();
        let year = self.year.value();
        if month == self.month.max()
            && transient == self.day.max() + 1
            && year < self.year.max()
        {
            // December's last day: month cannot increment to 13, so the
            // overflow rolls straight into January 1 of the next year.
            tracing::debug!(year = year + 1, "december day overflow rolls the year");
            self.assign(DatePart::Month, self.month.min());
            self.assign(DatePart::Day, self.day.min());
            self.assign(DatePart::Year, year + 1);
        } else if transient > self.day.max() && month < self.month.max() {
            tracing::debug!(month = month + 1, "day overflow rolls the month");
            self.assign(DatePart::Month, month + 1);
            self.assign(DatePart::Day, self.day.min());
        } else if transient < self.day.min() && month == self.month.min() {
            if year > self.year.min() {
                tracing::debug!(year = year - 1, "january day underflow rolls the year");
                self.assign(DatePart::Month, self.month.max());
                self.assign(DatePart::Year, year - 1);
                // the month assignment above already moved the ceiling to
                // December's length
                self.assign(DatePart::Day, self.day.max());
            } else {
                // cannot roll below the configured minimum year
                self.assign(DatePart::Month, self.month.min());
                self.assign(DatePart::Day, self.day.min());
            }
        } else if transient < self.day.min() && month > self.month.min() {
            tracing::debug!(month = month - 1, "day underflow rolls the month");
            self.assign(DatePart::Month, month - 1);
            self.assign(DatePart::Day, self.day.max());
        }
    }

    /// Recompute the day ceiling from the committed month/year and clamp
    /// the day into it. Mid-edit month/year garbage is clamped to the
    /// fields' own bounds for the computation only.
    fn reclamp_day(&mut self) {
        let ceiling = self.day_ceiling();
        self.day.set_max(ceiling);
        if let Some(event) = self.day.constrain() {
            tracing::debug!(ceiling, "day clamped to the new month length");
            self.route(DatePart::Day, vec![event]);
        }
    }

    fn day_ceiling(&self) -> i32 {
        let mut month = self.month.value();
        if month > self.month.max() {
            month = self.month.max();
        }
        if month < self.month.min() {
            month = self.month.min();
        }
        let mut year = self.year.value();
        if year > self.year.max() {
            year = self.year.max();
        }
        if year < self.year.min() {
            year = self.year.min();
        }
        calendar::days_in_month(year, month)
    }

    fn emit(&mut self, change: PartChanged) {
        tracing::trace!(part = change.part.name(), value = change.value, "part changed");
        if let Some(listener) = self.listener.as_mut() {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use jiff::civil::date;

    fn clock() -> FixedClock {
        FixedClock(date(2026, 6, 15))
    }

    fn picker_with_initial(initial: Date) -> DatePicker {
        DatePicker::new(
            DatePickerOptions {
                initial: Some(initial),
                ..Default::default()
            },
            &clock(),
        )
    }

    #[test]
    fn defaults_to_today() {
        let picker = DatePicker::new(DatePickerOptions::default(), &clock());
        assert_eq!(picker.date(), Some(date(2026, 6, 15)));
    }

    #[test]
    fn year_ceiling_is_next_year() {
        let picker = DatePicker::new(DatePickerOptions::default(), &clock());
        assert_eq!(picker.spinner(DatePart::Year).max(), 2027);
        assert_eq!(picker.spinner(DatePart::Year).min(), 2010);
    }

    #[test]
    fn initial_year_below_minimum_pulls_to_minimum() {
        let picker = picker_with_initial(date(2005, 3, 20));
        assert_eq!(picker.part_value(DatePart::Year), 2010);
        assert_eq!(picker.date(), Some(date(2010, 3, 20)));
    }

    #[test]
    fn initial_day_ceiling_matches_initial_month() {
        let picker = picker_with_initial(date(2024, 2, 29));
        assert_eq!(picker.spinner(DatePart::Day).max(), 29);
    }

    #[test]
    fn listener_sees_depth_first_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut picker = picker_with_initial(date(2023, 1, 31));
        let seen: Rc<RefCell<Vec<PartChanged>>> = Rc::default();
        let sink = Rc::clone(&seen);
        picker.on_change(move |change| sink.borrow_mut().push(change));

        picker.spin(DatePart::Day, SpinDirection::Up);

        // month commits first; the ceiling recompute clamps the stale day
        // 31 → 28 before the rollover assigns day := 1
        assert_eq!(
            *seen.borrow(),
            vec![
                PartChanged { part: DatePart::Month, value: 2 },
                PartChanged { part: DatePart::Day, value: 28 },
                PartChanged { part: DatePart::Day, value: 1 },
            ]
        );
        assert_eq!(picker.date(), Some(date(2023, 2, 1)));
    }
}
