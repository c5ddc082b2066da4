//! Inclusive calendar-day ranges

use chrono::{Datelike, NaiveDate};

use crate::utils::datetime::is_business_day;

/// Lazy, ascending iterator over every calendar day from `start` to `end`
///
/// The range is inclusive on both ends and empty when `start > end`. A clone
/// continues from the position of the range it was cloned from and advances
/// independently; build a new range to walk from `start` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }

    /// Number of Monday-Friday days left in the range
    pub fn business_days(self) -> usize {
        self.filter(|day| is_business_day(day.weekday())).count()
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|day| *day <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let remaining = usize::try_from((self.end - current).num_days() + 1).unwrap_or(0);
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}
