use anyhow::Result;
use clap::{Parser, Subcommand};

use tdbudget::cli::{
    handle_add, handle_check, handle_clear, handle_conf, handle_history, handle_init, handle_log,
    handle_monthly, handle_save, handle_show_config, handle_spend,
};
use tdbudget::config::{paths::BudgetPaths, settings::Settings};
use tdbudget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tdbudget",
    version,
    about = "Track slush funds, monthly buckets and long-term savings goals",
    long_about = "tdbudget keeps a small budget in a JSON file: income goes into \
                  slush, spending comes out of slush and is credited to a category, \
                  and monthly categories are archived and reset once a month."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty budget
    Init(tdbudget::cli::InitArgs),

    /// Record income into slush
    Save(tdbudget::cli::SaveArgs),

    /// Record spending against a category
    Spend(tdbudget::cli::SpendArgs),

    /// Add a monthly or long-term category
    Add(tdbudget::cli::AddArgs),

    /// Remove categories
    Clear(tdbudget::cli::ClearArgs),

    /// Show progress toward targets
    Check(tdbudget::cli::CheckArgs),

    /// Archive this month and reset monthly categories (run by a scheduler)
    Monthly(tdbudget::cli::MonthlyArgs),

    /// List monthly archives
    History,

    /// Change a setting
    Conf(tdbudget::cli::ConfArgs),

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    Log(tdbudget::cli::LogArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths);

    match cli.command {
        Commands::Init(args) => handle_init(&storage, &settings, args)?,
        Commands::Save(args) => handle_save(&storage, &settings, args)?,
        Commands::Spend(args) => handle_spend(&storage, &settings, args)?,
        Commands::Add(args) => handle_add(&storage, &settings, args)?,
        Commands::Clear(args) => handle_clear(&storage, args)?,
        Commands::Check(args) => handle_check(&storage, &settings, args)?,
        Commands::Monthly(args) => handle_monthly(&storage, &settings, args)?,
        Commands::History => handle_history(&storage)?,
        Commands::Conf(args) => handle_conf(&storage, &settings, args)?,
        Commands::Config => handle_show_config(&storage, &settings)?,
        Commands::Log(args) => handle_log(&storage, args)?,
    }

    Ok(())
}
