//! Category CLI commands
//!
//! `add`, `clear` and `check`.

use clap::Args;

use super::parse_amount;
use crate::audit::{AuditEntry, Operation};
use crate::config::settings::Settings;
use crate::display::{format_added, format_check_report, format_cleared};
use crate::error::{BudgetError, BudgetResult};
use crate::models::category::parse_deadline;
use crate::models::CategoryKind;
use crate::services::{
    add_category, check, clear_categories, scope_from_flags, NewCategory, Selection,
};
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category name
    pub name: String,
    /// Create a monthly category (reset every month)
    #[arg(short, long)]
    pub monthly: bool,
    /// Create a long-term category (needs --deadline)
    #[arg(short, long)]
    pub long_term: bool,
    /// Contribution target (e.g. "200" or "199.99")
    #[arg(short, long)]
    pub target: String,
    /// Deadline for a long-term category (MM/DD/YYYY)
    #[arg(short, long)]
    pub deadline: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Remove from the monthly list
    #[arg(short, long)]
    pub monthly: bool,
    /// Remove from the long-term list
    #[arg(short, long)]
    pub long_term: bool,
    /// Names to remove, or "all"
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Categories to check, "slush" for free funds; defaults to everything
    pub names: Vec<String>,
}

pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> BudgetResult<()> {
    let kind = scope_from_flags(args.monthly, args.long_term)?;
    let target = parse_amount(&args.target)?;

    let request = match kind {
        CategoryKind::Monthly => NewCategory::monthly(&args.name, target),
        CategoryKind::LongTerm => {
            let raw = args.deadline.as_deref().ok_or_else(|| {
                BudgetError::Validation("Long-term categories need --deadline MM/DD/YYYY".into())
            })?;
            let deadline =
                parse_deadline(raw).map_err(|e| BudgetError::Validation(e.to_string()))?;
            NewCategory::long_term(&args.name, target, deadline)
        }
    };

    let budget = storage.load_budget()?;
    let updated = add_category(&budget, request)?;
    storage.save_budget(&updated)?;

    let name = args.name.trim();
    let added = updated.find_category(name)?;
    storage.log(
        &AuditEntry::new(Operation::Add)
            .subject(name)
            .amount(added.target)
            .change(&serde_json::Value::Null, added),
    )?;

    println!("{}", format_added(added, &settings.currency_symbol));
    Ok(())
}

pub fn handle_clear(storage: &Storage, args: ClearArgs) -> BudgetResult<()> {
    let scope = scope_from_flags(args.monthly, args.long_term)?;
    let selection = Selection::from_args(&args.names);

    let budget = storage.load_budget()?;
    let cleared = clear_categories(&budget, scope, &selection);

    if !cleared.removed.is_empty() {
        storage.save_budget(&cleared.budget)?;
        for category in &cleared.removed {
            storage.log(
                &AuditEntry::new(Operation::Clear)
                    .subject(&category.name)
                    .change(category, &serde_json::Value::Null),
            )?;
        }
    }

    println!("{}", format_cleared(&cleared));
    for name in &cleared.not_found {
        eprintln!("Not found in {} categories: {}", scope, name);
    }

    Ok(())
}

pub fn handle_check(storage: &Storage, settings: &Settings, args: CheckArgs) -> BudgetResult<()> {
    let budget = storage.load_budget()?;
    let report = check(&budget, &Selection::from_args(&args.names));

    print!("{}", format_check_report(&report, &settings.currency_symbol));
    for name in &report.not_found {
        eprintln!("{}", BudgetError::category_not_found(name));
    }

    Ok(())
}
