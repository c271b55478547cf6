//! Monthly rollover and archive history
//!
//! `tdbudget monthly` is what the OS scheduler runs once a month.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::audit::{AuditEntry, Operation};
use crate::config::settings::Settings;
use crate::display::{format_history, format_rollover};
use crate::error::{BudgetError, BudgetResult};
use crate::services::rollover;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct MonthlyArgs {
    /// Roll over as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn handle_monthly(storage: &Storage, settings: &Settings, args: MonthlyArgs) -> BudgetResult<()> {
    let now = match args.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            BudgetError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
        })?,
        None => Local::now().date_naive(),
    };

    let budget = storage.load_budget()?;
    let result = rollover(&budget, now)?;

    // Archive first: if this fails the live budget still has the values.
    let archive_path = storage.archives().write(&result.archive)?;
    storage.save_budget(&result.budget)?;

    storage.log(
        &AuditEntry::new(Operation::Rollover)
            .subject(result.archive.period.to_string())
            .summary(format!("archived to {}", archive_path.display())),
    )?;

    println!(
        "Archived {} to {}",
        result.archive.period,
        archive_path.display()
    );
    print!(
        "{}",
        format_rollover(&result.archive.budget, &settings.currency_symbol)
    );
    println!("Monthly categories reset to zero.");

    Ok(())
}

pub fn handle_history(storage: &Storage) -> BudgetResult<()> {
    let archives = storage.archives().list()?;
    println!("{}", format_history(&archives));
    Ok(())
}
