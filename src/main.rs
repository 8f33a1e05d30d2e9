//! PTO Accrual CLI
//!
//! Reads a schedule CSV and prints the balance after every pay period.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- schedule.csv > balances.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` for the start/end dates, `debug` for every period

use pto_accrual::{AccrualError, Result, Schedule};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(AccrualError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let schedule = Schedule::from_csv(reader)?;
    let trajectory = schedule.run()?;

    for vacation in &trajectory.undeducted {
        log::warn!(
            "Vacation on {} ({} hours) falls after the end of the schedule",
            vacation.start_date,
            vacation.length
        );
    }

    if trajectory.final_pto.is_negative() {
        log::warn!("Final balance is negative: {} hours", trajectory.final_pto);
    }

    let stdout = io::stdout();
    let handle = stdout.lock();
    trajectory.write_csv(handle)?;

    Ok(())
}
