//! Result of running the engine to the end of its schedule.

use crate::error::Result;
use crate::hours::Hours;
use crate::vacation::Vacation;
use chrono::NaiveDate;
use std::io::Write;

/// Balance snapshots, one per processed pay period.
///
/// `balances[i]` is the balance after period `i`, reached on `dates[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    /// Clock position when the run started.
    pub start_date: NaiveDate,

    /// Clock position when the schedule ran out.
    pub end_date: NaiveDate,

    /// Balance after the last processed period.
    pub final_pto: Hours,

    /// Balance after each processed period.
    pub balances: Vec<Hours>,

    /// Date reached after each processed period.
    pub dates: Vec<NaiveDate>,

    /// Vacations the schedule ran out before deducting, in date order.
    pub undeducted: Vec<Vacation>,
}

impl Trajectory {
    /// Number of processed periods.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns `true` if the schedule ran out before any period was processed.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Splits into the final balance and the per-period balances.
    pub fn into_parts(self) -> (Hours, Vec<Hours>) {
        (self.final_pto, self.balances)
    }

    /// Writes one `period,date,balance` row per processed period.
    ///
    /// Periods are numbered from 1 and balances use 2 decimal places.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["period", "date", "balance"])?;

        for (index, (date, balance)) in self.dates.iter().zip(&self.balances).enumerate() {
            csv_writer.write_record([
                (index + 1).to_string(),
                date.to_string(),
                balance.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
