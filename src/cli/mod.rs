//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the budget operations and storage.

pub mod category;
pub mod config;
pub mod ledger;
pub mod monthly;

pub use category::{handle_add, handle_check, handle_clear, AddArgs, CheckArgs, ClearArgs};
pub use config::{handle_conf, handle_init, handle_log, handle_show_config, ConfArgs, InitArgs, LogArgs};
pub use ledger::{handle_save, handle_spend, SaveArgs, SpendArgs};
pub use monthly::{handle_history, handle_monthly, MonthlyArgs};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Parse an amount typed on the command line
pub(crate) fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}
