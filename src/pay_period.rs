//! A single accrual step.

use crate::hours::Hours;
use chrono::{Duration, NaiveDate};

/// Length in days of a pay period when none is given (every other week).
pub const DEFAULT_PERIOD_LENGTH: u32 = 14;

/// The accrual applied at the end of one pay period.
///
/// A `PayPeriod` is a value: it is derived from an [`AccruementPeriod`] on
/// demand and never mutated.
///
/// [`AccruementPeriod`]: crate::AccruementPeriod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    /// Hours of PTO granted per period.
    pub accrual_rate: Hours,

    /// Length of the period in days.
    pub period_length: u32,
}

impl PayPeriod {
    /// Creates a pay period granting `accrual_rate` hours every `period_length` days.
    pub fn new(accrual_rate: Hours, period_length: u32) -> Self {
        PayPeriod {
            accrual_rate,
            period_length,
        }
    }

    /// Creates a pay period of [`DEFAULT_PERIOD_LENGTH`] days.
    pub fn with_default_length(accrual_rate: Hours) -> Self {
        Self::new(accrual_rate, DEFAULT_PERIOD_LENGTH)
    }

    /// Applies one period of accrual.
    ///
    /// Returns the balance plus `accrual_rate` and the date moved forward by
    /// `period_length` days, or `None` if either result is out of range.
    /// The inputs are left untouched.
    pub fn add_pto(
        &self,
        current_pto: Hours,
        current_date: NaiveDate,
    ) -> Option<(Hours, NaiveDate)> {
        let pto = current_pto.checked_add(self.accrual_rate)?;
        let date =
            current_date.checked_add_signed(Duration::days(i64::from(self.period_length)))?;
        Some((pto, date))
    }
}
