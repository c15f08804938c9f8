//! Date ranges and overlap.
//!
//! Ranges are inclusive on both ends: a stay ending on day X and another
//! starting on day X share that day and therefore overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Whether `[start1, end1]` and `[start2, end2]` share at least one day.
pub fn dates_overlap(start1: NaiveDate, end1: NaiveDate, start2: NaiveDate, end2: NaiveDate) -> bool {
    start1 <= end2 && start2 <= end1
}

/// Absolute number of days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// A validated stay: `start` strictly precedes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayRangeRepr")]
pub struct StayRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct StayRangeRepr {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<StayRangeRepr> for StayRange {
    type Error = DomainError;

    fn try_from(value: StayRangeRepr) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl StayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation("start date must be before end date"));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn nights(&self) -> i64 {
        days_between(self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        dates_overlap(self.start, self.end, other.start, other.end)
    }

    pub fn overlaps_dates(&self, start: NaiveDate, end: NaiveDate) -> bool {
        dates_overlap(self.start, self.end, start, end)
    }
}

impl ValueObject for StayRange {}

impl core::fmt::Display for StayRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
