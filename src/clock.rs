//! Injectable time source.
//!
//! "Today" is an environmental read; routing it through a trait keeps the
//! date picker deterministic under test.

use jiff::civil::Date;

/// Source of the current date, used for initial values and the year ceiling.
pub trait Clock {
    fn today(&self) -> Date;
}

/// System clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        jiff::Zoned::now().date()
    }
}

/// Clock pinned to a fixed date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
