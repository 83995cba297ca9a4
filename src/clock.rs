//! Clock implementations

use chrono::{Local, NaiveDate};

use crate::traits::Clock;

/// The clock of the machine we are running on, yielding its local calendar
/// date
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a fixed date.
///
/// Useful in tests, and for previewing the views as of another day.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fixed_clock_stays_fixed() {
        let date = "2025-05-05".parse().unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn the_system_clock_follows_the_local_date() {
        assert_eq!(SystemClock.today(), Local::now().date_naive());
    }
}
