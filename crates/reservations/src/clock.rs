//! Source of "today" for reservation creation dates.

use chrono::NaiveDate;

pub trait Clock: core::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always returns the same date. Useful for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
