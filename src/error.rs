//! Error types for the accrual engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AccrualError>;

/// Errors that can occur while loading a schedule or building an engine.
///
/// Running out of schedule is not an error; see [`crate::Advance::Exhausted`].
#[derive(Error, Debug)]
pub enum AccrualError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid schedule row
    #[error("Invalid schedule entry at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// The engine was given no accruement periods
    #[error("Schedule has no accruement periods")]
    EmptySchedule,

    /// A segment whose periods would never move the clock forward
    #[error("Segment {index} has a period length of zero days")]
    ZeroPeriodLength { index: usize },

    /// A segment whose periods would run past the last representable date
    #[error("Segment {index} ends too far in the future")]
    ScheduleOutOfRange { index: usize },

    /// The running balance no longer fits in a decimal
    #[error("PTO balance overflowed on {date}")]
    BalanceOverflow { date: chrono::NaiveDate },

    /// Parallel configuration lists disagree in length
    #[error(
        "Mismatched schedule lists: {period_lengths} period lengths, {start_dates} start dates, \
         {end_dates} end dates, {accrual_rates} accrual rates"
    )]
    MismatchedLengths {
        period_lengths: usize,
        start_dates: usize,
        end_dates: usize,
        accrual_rates: usize,
    },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: pto-accrual <schedule.csv>")]
    MissingArgument,
}
