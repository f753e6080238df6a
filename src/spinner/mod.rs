//! Bounded integer spinner field.
//!
//! A [`NumberSpinner`] holds an integer constrained to `[min, max]` over a
//! textual buffer, so empty and partially typed states are representable
//! mid-edit. It is not calendar-aware; the composite date field owns the
//! cross-field rules.
//!
//! Mutating operations return the notifications they produced, in the order
//! they occurred, for the owner to route. There is no hidden queue: the
//! owner decides what each event means and dispatches follow-up mutations
//! synchronously.

/// Direction of a single ±1 spin request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    Up,
    Down,
}

/// Notification produced by a spinner mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerEvent {
    /// The committed value changed.
    ValueChanged { value: i32 },

    /// A spin was requested. `transient` is the candidate value before
    /// bound enforcement; it is reported even when the spinner refused to
    /// commit it, so an owner can detect boundary-crossing attempts and
    /// reinterpret them (e.g. as a rollover into an adjacent field).
    SpinAttempt {
        direction: SpinDirection,
        transient: i32,
    },
}

/// An integer input bounded to `[min, max]` with up/down spin semantics.
#[derive(Debug, Clone)]
pub struct NumberSpinner {
    min: i32,
    max: i32,
    text: String,
}

impl NumberSpinner {
    /// Create a spinner bounded to `[min, max]`. An out-of-bounds `initial`
    /// is clamped on construction.
    pub fn new(min: i32, max: i32, initial: i32) -> Self {
        let mut spinner = Self {
            min,
            max,
            text: initial.to_string(),
        };
        if !spinner.is_valid() {
            let _ = spinner.constrain();
        }
        spinner
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Retune the upper bound. The owner re-runs [`constrain`] afterwards
    /// if the current value must respect the new bound immediately.
    ///
    /// [`constrain`]: NumberSpinner::constrain
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// The raw textual buffer, possibly empty or partial mid-edit.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The effective value: the parsed buffer, or `min` when the buffer is
    /// empty or non-numeric (fail-soft, never an error).
    pub fn value(&self) -> i32 {
        self.text.trim().parse().unwrap_or(self.min)
    }

    /// Whether the effective value lies within `[min, max]`.
    pub fn is_valid(&self) -> bool {
        let value = self.value();
        self.min <= value && value <= self.max
    }

    /// Request a ±1 spin. The candidate value is committed only when it
    /// stays within bounds; the `SpinAttempt` event reports it regardless,
    /// after any `ValueChanged`.
    pub fn spin(&mut self, direction: SpinDirection) -> Vec<SpinnerEvent> {
        let transient = match direction {
            SpinDirection::Up => self.value() + 1,
            SpinDirection::Down => self.value() - 1,
        };
        let mut events = Vec::new();
        if self.min <= transient && transient <= self.max {
            self.text = transient.to_string();
            events.push(SpinnerEvent::ValueChanged { value: transient });
        }
        events.push(SpinnerEvent::SpinAttempt {
            direction,
            transient,
        });
        events
    }

    /// Set the value unconditionally, bypassing bound enforcement at this
    /// layer. Always notifies. Owners use this for rollover assignments
    /// (e.g. forcing day back to 1).
    pub fn set_value(&mut self, value: i32) -> Vec<SpinnerEvent> {
        self.text = value.to_string();
        vec![SpinnerEvent::ValueChanged { value }]
    }

    /// Same as [`set_value`], without the notification. Reserved for owners
    /// that immediately issue their own consolidated notification; none of
    /// the current rollover rules need it.
    ///
    /// [`set_value`]: NumberSpinner::set_value
    pub fn set_value_silent(&mut self, value: i32) {
        self.text = value.to_string();
    }

    /// Clamp an out-of-range value to the nearest bound. An empty buffer is
    /// left alone (the field is mid-edit). Idempotent.
    pub fn constrain(&mut self) -> Option<SpinnerEvent> {
        if self.text.is_empty() {
            return None;
        }
        let value = self.value();
        let clamped = if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            return None;
        };
        self.text = clamped.to_string();
        Some(SpinnerEvent::ValueChanged { value: clamped })
    }

    /// Replace the textual buffer (the typed-edit path). The caller is
    /// responsible for digit filtering. Notifies with the effective value
    /// when the text actually changed.
    pub fn set_text(&mut self, text: &str) -> Vec<SpinnerEvent> {
        if text == self.text {
            return Vec::new();
        }
        self.text = text.to_string();
        vec![SpinnerEvent::ValueChanged {
            value: self.value(),
        }]
    }

    /// Focus left the field: an empty buffer resets to `min`, anything else
    /// is constrained into bounds.
    pub fn on_blur(&mut self) -> Vec<SpinnerEvent> {
        if self.text.is_empty() {
            self.set_value(self.min)
        } else {
            self.constrain().into_iter().collect()
        }
    }
}
