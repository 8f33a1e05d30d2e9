//! Planned time off.

use crate::hours::Hours;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// A dated block of PTO usage.
///
/// # Ordering
///
/// Vacations order by `start_date`. Two vacations starting on the same day
/// fall back to `length` so the ordering stays total and agrees with `Eq`;
/// the engine sorts by date alone so same-day vacations keep insertion order.
///
/// A vacation also compares against a bare [`NaiveDate`], which is how the
/// engine checks whether it is due. Comparing with any other type does not
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vacation {
    /// First day of the vacation.
    pub start_date: NaiveDate,

    /// Hours of PTO consumed.
    pub length: Hours,
}

impl Vacation {
    /// Creates a vacation using `length` hours starting on `start_date`.
    pub fn new(start_date: NaiveDate, length: Hours) -> Self {
        Vacation { start_date, length }
    }

    /// Returns `true` if the vacation starts strictly before `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        *self < today
    }
}

impl Ord for Vacation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_date
            .cmp(&other.start_date)
            .then_with(|| self.length.cmp(&other.length))
    }
}

impl PartialOrd for Vacation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<NaiveDate> for Vacation {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.start_date == *other
    }
}

impl PartialOrd<NaiveDate> for Vacation {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.start_date.cmp(other))
    }
}
