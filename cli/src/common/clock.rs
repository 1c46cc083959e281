//! # docsetup Clock
//!
//! File: cli/src/common/clock.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! Several collected values are stamped with today's date (`START_DATE`,
//! `SPRINT_DATES`, `PREVIOUS_SPRINT`, ...). They read the date through the
//! `Clock` trait so tests can pin it.
//!
use chrono::{Local, NaiveDate};

/// Source of "today" for date-derived values.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
