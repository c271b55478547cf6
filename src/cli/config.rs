//! Setup and settings commands: `init`, `conf`, `config`, `log`

use clap::Args;

use crate::audit::{AuditEntry, Operation};
use crate::config::settings::Settings;
use crate::display::format_audit_log;
use crate::error::BudgetResult;
use crate::storage::{initialize_storage, Storage};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Replace an existing budget with an empty one
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfArgs {
    /// Setting name (month_start_day, overspend_policy, currency_symbol)
    pub key: String,
    /// New value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,
}

pub fn handle_init(storage: &Storage, settings: &Settings, args: InitArgs) -> BudgetResult<()> {
    let paths = storage.paths();
    initialize_storage(paths, args.force)?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    storage.log(&AuditEntry::new(Operation::Init).summary(if args.force {
        "budget reset to empty"
    } else {
        "budget created"
    }))?;

    println!("Initialized tdbudget at: {}", paths.base_dir().display());
    println!();
    println!(
        "To reset monthly categories, schedule 'tdbudget monthly' to run on day {} of each month.",
        settings.month_start_day
    );
    println!("You can change the day with 'tdbudget conf month_start_day <1-28>'.");
    Ok(())
}

pub fn handle_conf(storage: &Storage, settings: &Settings, args: ConfArgs) -> BudgetResult<()> {
    let mut updated = settings.clone();
    updated.set(&args.key, &args.value)?;
    updated.save(storage.paths())?;

    storage.log(
        &AuditEntry::new(Operation::Configure)
            .subject(&args.key)
            .change(settings, &updated),
    )?;

    println!("Set {} = {}", args.key, args.value);
    Ok(())
}

pub fn handle_show_config(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let paths = storage.paths();
    println!("tdbudget configuration");
    println!("======================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Budget file:    {}", paths.budget_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  month_start_day:  {}", settings.month_start_day);
    println!("  overspend_policy: {}", settings.overspend_policy);
    println!("  currency_symbol:  {}", settings.currency_symbol);
    Ok(())
}

pub fn handle_log(storage: &Storage, args: LogArgs) -> BudgetResult<()> {
    let entries = storage.audit().read_recent(args.count)?;
    println!("{}", format_audit_log(&entries));
    Ok(())
}
