//! Schedule files: starting balance, accrual segments and vacations in one CSV.
//!
//! ```text
//! type,start,end,length,hours
//! start,2023-01-27,,,33.42
//! period,2023-01-27,2023-04-04,14,5.85
//! vacation,2023-03-06,,,40
//! ```

use crate::accruement_period::AccruementPeriod;
use crate::engine::PtoAccruement;
use crate::error::{AccrualError, Result};
use crate::hours::Hours;
use crate::pay_period::DEFAULT_PERIOD_LENGTH;
use crate::trajectory::Trajectory;
use crate::vacation::Vacation;
use chrono::{Local, NaiveDate};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// Largest hour amount a single row may carry, in either direction.
pub const MAX_ENTRY_HOURS: u32 = 100_000;

/// Raw schedule row as read from CSV.
///
/// Which optional fields are required depends on `entry_type`.
#[derive(Debug, Deserialize)]
pub struct ScheduleRecord {
    /// Entry type: start, period, vacation
    #[serde(rename = "type")]
    pub entry_type: String,

    /// Starting day, segment start or vacation date
    pub start: String,

    /// Segment end date (period only)
    pub end: Option<String>,

    /// Pay period length in days (period only, defaults to 14)
    pub length: Option<String>,

    /// Starting balance, accrual rate or vacation hours
    pub hours: Option<String>,
}

impl ScheduleRecord {
    /// Parses the raw CSV record into a typed entry.
    ///
    /// Returns a short description of the problem if the row is invalid.
    pub fn parse(&self) -> std::result::Result<ScheduleEntry, String> {
        let entry_type = self.entry_type.trim().to_lowercase();
        let start = parse_date("start", &self.start)?;

        match entry_type.as_str() {
            "start" => Ok(ScheduleEntry::Start {
                day: start,
                pto: self.parse_hours()?,
            }),
            "period" => {
                let end = parse_date("end", required("end", &self.end)?)?;
                let period_length = match self.length.as_deref().map(str::trim) {
                    None | Some("") => DEFAULT_PERIOD_LENGTH,
                    Some(raw) => raw
                        .parse::<u32>()
                        .map_err(|e| format!("invalid length '{}': {}", raw, e))?,
                };
                if period_length == 0 {
                    return Err("length must be at least one day".to_string());
                }
                let period = AccruementPeriod::new(period_length, start, end, self.parse_hours()?);
                if !period.fits_calendar() {
                    return Err(format!("end date {} is too far in the future", end));
                }
                Ok(ScheduleEntry::Period(period))
            }
            "vacation" => Ok(ScheduleEntry::Vacation(Vacation::new(
                start,
                self.parse_hours()?,
            ))),
            other => Err(format!("unknown entry type '{}'", other)),
        }
    }

    /// Parses the hours field, rejecting amounts beyond [`MAX_ENTRY_HOURS`].
    fn parse_hours(&self) -> std::result::Result<Hours, String> {
        let raw = required("hours", &self.hours)?;
        let value =
            Decimal::from_str(raw).map_err(|e| format!("invalid hours '{}': {}", raw, e))?;
        if value.abs() > Decimal::from(MAX_ENTRY_HOURS) {
            return Err(format!(
                "hours '{}' exceed the limit of {}",
                raw, MAX_ENTRY_HOURS
            ));
        }
        if value.scale() > Hours::SCALE {
            warn!(
                "Hours '{}' rounded to {} decimal places",
                raw,
                Hours::SCALE
            );
        }
        Ok(Hours::new(value))
    }
}

fn required<'a>(field: &str, value: &'a Option<String>) -> std::result::Result<&'a str, String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing {}", field)),
    }
}

fn parse_date(field: &str, raw: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::from_str(trimmed).map_err(|e| format!("invalid {} date '{}': {}", field, trimmed, e))
}

/// A parsed and validated schedule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleEntry {
    /// Where the engine's clock and balance begin.
    Start { day: NaiveDate, pto: Hours },

    /// One accrual segment.
    Period(AccruementPeriod),

    /// One planned vacation.
    Vacation(Vacation),
}

/// Everything needed to run a forecast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Balance before the first period.
    pub starting_pto: Hours,

    /// First day of the forecast. `None` means today.
    pub starting_day: Option<NaiveDate>,

    /// Accrual segments in file order.
    pub periods: Vec<AccruementPeriod>,

    /// Planned vacations in file order.
    pub vacations: Vec<Vacation>,
}

impl Schedule {
    /// Reads a schedule from CSV in streaming fashion.
    ///
    /// Invalid rows are logged at warn level and skipped.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut schedule = Schedule::default();

        for (row_idx, result) in csv_reader.deserialize::<ScheduleRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let parsed = result
                .map_err(|e| e.to_string())
                .and_then(|record| record.parse());

            match parsed {
                Ok(entry) => schedule.apply(entry, row),
                Err(message) => warn!("{}", AccrualError::InvalidRecord { row, message }),
            }
        }

        Ok(schedule)
    }

    /// Adds one entry. A later start entry replaces an earlier one.
    pub fn apply(&mut self, entry: ScheduleEntry, row: usize) {
        match entry {
            ScheduleEntry::Start { day, pto } => {
                if self.starting_day.is_some() {
                    debug!("Row {}: Replacing earlier start entry", row);
                }
                self.starting_day = Some(day);
                self.starting_pto = pto;
            }
            ScheduleEntry::Period(period) => {
                debug!(
                    "Row {}: Segment {}..{} at {} hours every {} days",
                    row, period.start_date, period.end_date, period.accrual_rate, period.period_length
                );
                self.periods.push(period);
            }
            ScheduleEntry::Vacation(vacation) => {
                debug!(
                    "Row {}: Vacation on {} for {} hours",
                    row, vacation.start_date, vacation.length
                );
                self.vacations.push(vacation);
            }
        }
    }

    /// Builds the engine for this schedule, starting today if no start was given.
    pub fn engine(&self) -> Result<PtoAccruement> {
        let starting_day = self
            .starting_day
            .unwrap_or_else(|| Local::now().date_naive());
        PtoAccruement::new(self.periods.iter().cloned(), self.starting_pto, starting_day)
    }

    /// Runs the forecast to the end of the schedule.
    pub fn run(&self) -> Result<Trajectory> {
        let mut engine = self.engine()?;
        engine.compute_trajectory(&self.vacations)
    }
}
