//! datespin: a three-field calendar date spinner for the terminal.
//!
//! The core of this crate is a pair of widgets-without-pixels: a bounded
//! integer spinner ([`spinner::NumberSpinner`]) and a composite date field
//! ([`picker::DatePicker`]) that coordinates three of them (day, month,
//! year) into one coherent calendar date. Spinning past a field's bound
//! rolls into the neighboring field (Jan 31 + 1 day → Feb 1, Dec 31 + 1 day
//! → Jan 1 of the next year), and editing month or year re-clamps the day
//! against the new month length (Jan 31 → Feb 28).
//!
//! All cross-field dispatch is synchronous and depth-first: a rollover
//! assignment observes the side effects of the assignments made before it
//! in the same rule. Rendering and input live in [`ui`] and contain no
//! calendar logic.
//!
//! ```
//! use datespin::clock::FixedClock;
//! use datespin::picker::{DatePart, DatePicker, DatePickerOptions};
//! use datespin::spinner::SpinDirection;
//!
//! let clock = FixedClock(jiff::civil::date(2023, 1, 31));
//! let mut picker = DatePicker::new(DatePickerOptions::default(), &clock);
//! picker.spin(DatePart::Day, SpinDirection::Up);
//! assert_eq!(picker.date(), Some(jiff::civil::date(2023, 2, 1)));
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod picker;
pub mod spinner;
pub mod ui;
