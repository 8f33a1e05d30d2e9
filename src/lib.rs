//! # PTO Accrual
//!
//! Forecasts paid-time-off balances over a sequence of pay periods, each
//! segment of the schedule with its own accrual rate and period length,
//! while deducting hours for planned vacations.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Hours are held at 4 decimal places via `rust_decimal`
//! - **Grace boundary**: A segment stays active one period past its end date
//! - **Explicit exhaustion**: Running out of schedule is a result variant, not an error
//! - **Single pass**: Each vacation is deducted at most once
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pto_accrual::{AccruementPeriod, Hours, PtoAccruement, Vacation};
//! use std::str::FromStr;
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 27).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
//! let segment = AccruementPeriod::new(14, start, end, Hours::from_str("5.85").unwrap());
//!
//! let mut engine = PtoAccruement::new([segment], Hours::ZERO, start).unwrap();
//! let vacation = Vacation::new(NaiveDate::from_ymd_opt(2023, 7, 3).unwrap(), Hours::from(32));
//! let trajectory = engine.compute_trajectory(&[vacation]).unwrap();
//!
//! assert_eq!(trajectory.len(), 26);
//! assert_eq!(trajectory.final_pto.to_string(), "120.10");
//! ```

pub mod accruement_period;
pub mod engine;
pub mod error;
pub mod hours;
pub mod pay_period;
pub mod schedule;
pub mod trajectory;
pub mod vacation;

pub use accruement_period::AccruementPeriod;
pub use engine::{Advance, PtoAccruement};
pub use error::{AccrualError, Result};
pub use hours::Hours;
pub use pay_period::{PayPeriod, DEFAULT_PERIOD_LENGTH};
pub use schedule::{Schedule, ScheduleEntry, ScheduleRecord};
pub use trajectory::Trajectory;
pub use vacation::Vacation;
