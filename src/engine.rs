//! Core accrual engine.
//!
//! Walks forward one pay period at a time through the configured segments,
//! deducting vacation hours as the clock passes them.

use crate::accruement_period::AccruementPeriod;
use crate::error::{AccrualError, Result};
use crate::hours::Hours;
use crate::trajectory::Trajectory;
use crate::vacation::Vacation;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::collections::VecDeque;

/// Outcome of a single [`PtoAccruement::advance_one_period`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Advance {
    /// A period was processed; carries the balance after it.
    Accrued(Hours),

    /// The clock is past the grace boundary of the last segment.
    Exhausted,
}

/// The PTO accrual engine.
///
/// Owns the remaining schedule, the running balance and its own clock.
/// Segments are consumed front to back and `today` only moves forward, by
/// the active segment's period length.
///
/// # Invariants
///
/// - `periods` is never empty; the last segment is kept after exhaustion
/// - `today` never moves backwards
#[derive(Debug, Clone)]
pub struct PtoAccruement {
    /// Remaining segments. The front one is active.
    periods: VecDeque<AccruementPeriod>,

    /// Running balance.
    pto: Hours,

    /// The engine's clock: the date the next period starts on.
    today: NaiveDate,
}

impl PtoAccruement {
    /// Creates an engine from pre-built segments.
    ///
    /// Returns [`AccrualError::EmptySchedule`] if `periods` is empty,
    /// [`AccrualError::ZeroPeriodLength`] if any segment has zero-day periods and
    /// [`AccrualError::ScheduleOutOfRange`] if a segment would step past the
    /// last representable date.
    pub fn new<I>(periods: I, starting_pto: Hours, starting_day: NaiveDate) -> Result<Self>
    where
        I: IntoIterator<Item = AccruementPeriod>,
    {
        let periods: VecDeque<_> = periods.into_iter().collect();
        if periods.is_empty() {
            return Err(AccrualError::EmptySchedule);
        }
        if let Some(index) = periods.iter().position(|p| p.period_length == 0) {
            return Err(AccrualError::ZeroPeriodLength { index });
        }
        if let Some(index) = periods.iter().position(|p| !p.fits_calendar()) {
            return Err(AccrualError::ScheduleOutOfRange { index });
        }

        Ok(PtoAccruement {
            periods,
            pto: starting_pto,
            today: starting_day,
        })
    }

    /// Creates an engine whose clock starts on the local calendar date.
    pub fn starting_today<I>(periods: I, starting_pto: Hours) -> Result<Self>
    where
        I: IntoIterator<Item = AccruementPeriod>,
    {
        Self::new(periods, starting_pto, Local::now().date_naive())
    }

    /// Creates an engine from parallel per-segment lists.
    ///
    /// The `i`-th entry of every list describes segment `i`, so all four lists
    /// must have the same length.
    pub fn from_parallel_lists(
        period_lengths: &[u32],
        start_dates: &[NaiveDate],
        end_dates: &[NaiveDate],
        accrual_rates: &[Hours],
        starting_pto: Hours,
        starting_day: NaiveDate,
    ) -> Result<Self> {
        let count = period_lengths.len();
        if start_dates.len() != count || end_dates.len() != count || accrual_rates.len() != count
        {
            return Err(AccrualError::MismatchedLengths {
                period_lengths: count,
                start_dates: start_dates.len(),
                end_dates: end_dates.len(),
                accrual_rates: accrual_rates.len(),
            });
        }

        let periods = (0..count).map(|i| {
            AccruementPeriod::new(
                period_lengths[i],
                start_dates[i],
                end_dates[i],
                accrual_rates[i],
            )
        });
        Self::new(periods, starting_pto, starting_day)
    }

    /// Current balance.
    pub fn pto(&self) -> Hours {
        self.pto
    }

    /// Current position of the engine's clock.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Segments not yet retired, active one first.
    pub fn remaining_periods(&self) -> impl Iterator<Item = &AccruementPeriod> {
        self.periods.iter()
    }

    /// Processes one pay period, deducting `pto_used` after the accrual.
    ///
    /// Segments whose grace boundary is already behind the clock are retired
    /// until one is usable. When only the last segment remains and it is also
    /// behind the clock, nothing changes and [`Advance::Exhausted`] is returned.
    ///
    /// Returns [`AccrualError::BalanceOverflow`], leaving the engine unchanged,
    /// if the new balance does not fit.
    pub fn advance_one_period(&mut self, pto_used: Hours) -> Result<Advance> {
        loop {
            let Some(segment) = self.periods.front() else {
                return Ok(Advance::Exhausted);
            };

            if segment
                .grace_boundary()
                .is_some_and(|boundary| self.today <= boundary)
            {
                let (pto, today) = segment
                    .pay_period()
                    .add_pto(self.pto, self.today)
                    .and_then(|(pto, today)| Some((pto.checked_sub(pto_used)?, today)))
                    .ok_or(AccrualError::BalanceOverflow { date: self.today })?;
                self.pto = pto;
                self.today = today;

                debug!(
                    "Period ending {}: accrued {}, used {}, balance {}",
                    self.today, segment.accrual_rate, pto_used, self.pto
                );
                return Ok(Advance::Accrued(self.pto));
            }

            if self.periods.len() == 1 {
                debug!("Clock {} is past the final grace boundary", self.today);
                return Ok(Advance::Exhausted);
            }

            if let Some(retired) = self.periods.pop_front() {
                debug!(
                    "Retiring segment {}..{} at {}",
                    retired.start_date, retired.end_date, self.today
                );
            }
        }
    }

    /// Runs the engine until the schedule is exhausted.
    ///
    /// Each vacation is deducted once, by the first period that starts after
    /// it. Vacations still pending when the schedule runs out are reported in
    /// [`Trajectory::undeducted`] instead of being applied.
    ///
    /// Fails with [`AccrualError::BalanceOverflow`] if the balance or a
    /// period's total usage does not fit.
    pub fn compute_trajectory(&mut self, vacations: &[Vacation]) -> Result<Trajectory> {
        let mut pending = vacations.to_vec();
        pending.sort_by_key(|vacation| vacation.start_date);

        let start_date = self.today;
        info!("Start date is {}", start_date);

        let mut balances = Vec::new();
        let mut dates = Vec::new();
        let mut cursor = 0;

        let undeducted_from = loop {
            let batch_start = cursor;
            let mut pto_used = Hours::ZERO;

            while let Some(vacation) = pending.get(cursor).filter(|v| v.is_due(self.today)) {
                debug!(
                    "Deducting {} hours for vacation on {}",
                    vacation.length, vacation.start_date
                );
                pto_used = pto_used
                    .checked_add(vacation.length)
                    .ok_or(AccrualError::BalanceOverflow { date: self.today })?;
                cursor += 1;
            }

            match self.advance_one_period(pto_used)? {
                Advance::Accrued(pto) => {
                    balances.push(pto);
                    dates.push(self.today);
                }
                Advance::Exhausted => break batch_start,
            }
        };

        info!("End date is {}", self.today);

        Ok(Trajectory {
            start_date,
            end_date: self.today,
            final_pto: self.pto,
            balances,
            dates,
            undeducted: pending.split_off(undeducted_from),
        })
    }
}
