//! User settings for tdbudget
//!
//! Settings are loaded once by the shell and passed explicitly to whatever
//! needs them; nothing reads them from global state.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::services::OverspendPolicy;

/// Last day of month that is valid as a period delimiter in every month
pub const MAX_MONTH_START_DAY: u32 = 28;

/// User settings for tdbudget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Day of the month the scheduler runs `tdbudget monthly` (1-28)
    #[serde(default = "default_month_start_day")]
    pub month_start_day: u32,

    /// When a spend should raise the overspend warning
    #[serde(default)]
    pub overspend_policy: OverspendPolicy,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_month_start_day() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            month_start_day: default_month_start_day(),
            overspend_policy: OverspendPolicy::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Update a single setting by key, as given on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        match key {
            "month_start_day" | "month_start" => {
                let day: u32 = value.trim().parse().map_err(|_| {
                    BudgetError::Config(format!("month_start_day must be a number, got '{}'", value))
                })?;
                check_month_start_day(day)?;
                self.month_start_day = day;
            }
            "overspend_policy" => {
                self.overspend_policy = value.parse()?;
            }
            "currency_symbol" => {
                self.currency_symbol = value.to_string();
            }
            other => {
                return Err(BudgetError::Config(format!(
                    "Unknown setting '{}'. Known settings: month_start_day, overspend_policy, currency_symbol",
                    other
                )));
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), BudgetError> {
        check_month_start_day(self.month_start_day)
    }
}

fn check_month_start_day(day: u32) -> Result<(), BudgetError> {
    if day == 0 || day > MAX_MONTH_START_DAY {
        return Err(BudgetError::Config(format!(
            "month_start_day must be between 1 and {}, got {}",
            MAX_MONTH_START_DAY, day
        )));
    }
    Ok(())
}
