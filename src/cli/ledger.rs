//! Spend and save commands

use clap::Args;

use super::parse_amount;
use crate::audit::{AuditEntry, Operation};
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::{save, spend};
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct SpendArgs {
    /// Category the money went to
    pub category: String,
    /// Amount spent (negative to correct an earlier entry)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Income to add to slush (negative to withdraw)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

pub fn handle_spend(storage: &Storage, settings: &Settings, args: SpendArgs) -> BudgetResult<()> {
    let amount = parse_amount(&args.amount)?;
    let budget = storage.load_budget()?;

    let name = args.category.trim();

    let spent = spend(&budget, name, amount, settings.overspend_policy)?;
    storage.save_budget(&spent.budget)?;

    let symbol = &settings.currency_symbol;
    let before = budget.find_category(name)?;
    let after = spent.budget.find_category(name)?;

    storage.log(
        &AuditEntry::new(Operation::Spend)
            .subject(name)
            .amount(amount)
            .change(before, after)
            .summary(format!(
                "slush: {} -> {}",
                budget.slush().format_with_symbol(symbol),
                spent.budget.slush().format_with_symbol(symbol)
            )),
    )?;

    println!(
        "Spent {} on '{}' ({} of {} so far)",
        amount.format_with_symbol(symbol),
        after.name,
        after.contribution.format_with_symbol(symbol),
        after.target.format_with_symbol(symbol)
    );

    if let Some(warning) = spent.warning {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}

pub fn handle_save(storage: &Storage, settings: &Settings, args: SaveArgs) -> BudgetResult<()> {
    let amount = parse_amount(&args.amount)?;
    let budget = storage.load_budget()?;

    let saved = save(&budget, amount)?;
    storage.save_budget(&saved)?;

    let symbol = &settings.currency_symbol;
    storage.log(
        &AuditEntry::new(Operation::Save)
            .amount(amount)
            .summary(format!(
                "slush: {} -> {}",
                budget.slush().format_with_symbol(symbol),
                saved.slush().format_with_symbol(symbol)
            )),
    )?;

    println!(
        "Saved {}. You have {} in free funds",
        amount.format_with_symbol(symbol),
        saved.slush().format_with_symbol(symbol)
    );

    Ok(())
}
