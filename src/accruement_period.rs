//! Accrual configuration segments.

use crate::hours::Hours;
use crate::pay_period::PayPeriod;
use chrono::{Duration, NaiveDate};

/// One segment of the accrual schedule: a date range with a fixed rate.
///
/// Segments are expected to be contiguous and chronologically ordered. This
/// is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccruementPeriod {
    /// Length in days of each pay period in this segment.
    pub period_length: u32,

    /// First day the rate applies.
    pub start_date: NaiveDate,

    /// Nominal last day the rate applies.
    pub end_date: NaiveDate,

    /// Hours granted per pay period.
    pub accrual_rate: Hours,
}

impl AccruementPeriod {
    /// Creates a segment from its period length, date range and rate.
    pub fn new(
        period_length: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        accrual_rate: Hours,
    ) -> Self {
        AccruementPeriod {
            period_length,
            start_date,
            end_date,
            accrual_rate,
        }
    }

    /// The pay period applied while this segment is active.
    pub fn pay_period(&self) -> PayPeriod {
        PayPeriod::new(self.accrual_rate, self.period_length)
    }

    /// `end_date` plus one extra period.
    ///
    /// A segment stays active until the engine's clock passes this date, so
    /// usage dated inside the segment's final period still deducts against it.
    /// Returns `None` if the date is out of range.
    pub fn grace_boundary(&self) -> Option<NaiveDate> {
        self.end_date
            .checked_add_signed(Duration::days(i64::from(self.period_length)))
    }

    /// Returns `true` if every step this segment can take stays in range.
    ///
    /// The last step starts no later than the grace boundary, so its end date
    /// is at most one more period past it.
    pub fn fits_calendar(&self) -> bool {
        self.grace_boundary()
            .and_then(|boundary| {
                boundary.checked_add_signed(Duration::days(i64::from(self.period_length)))
            })
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grace_boundary_is_one_period_past_end() {
        let segment = AccruementPeriod::new(
            14,
            date(2023, 1, 27),
            date(2023, 12, 31),
            Hours::from_str("5.85").unwrap(),
        );

        assert_eq!(segment.grace_boundary(), Some(date(2024, 1, 14)));
        assert!(segment.fits_calendar());
    }

    #[test]
    fn test_pay_period_carries_rate_and_length() {
        let segment = AccruementPeriod::new(
            7,
            date(2023, 4, 4),
            date(2023, 12, 31),
            Hours::from_str("3.7").unwrap(),
        );
        let pay_period = segment.pay_period();

        assert_eq!(pay_period.period_length, 7);
        assert_eq!(pay_period.accrual_rate.to_string(), "3.70");
    }

    #[test]
    fn test_far_future_end_does_not_fit() {
        let at_max = AccruementPeriod::new(14, date(2023, 1, 27), NaiveDate::MAX, Hours::ZERO);
        assert_eq!(at_max.grace_boundary(), None);
        assert!(!at_max.fits_calendar());

        // Boundary fits, but the step that starts on it would not.
        let near_max = AccruementPeriod::new(
            14,
            date(2023, 1, 27),
            NaiveDate::MAX - Duration::days(20),
            Hours::ZERO,
        );
        assert!(near_max.grace_boundary().is_some());
        assert!(!near_max.fits_calendar());
    }
}
