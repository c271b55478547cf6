//! Path management for tdbudget
//!
//! Everything lives in a single directory.
//!
//! ## Path Resolution Order
//!
//! 1. `TDBUDGET_DIR` environment variable (if set)
//! 2. `~/.tdbudget` in the user's home directory

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BudgetError;
use crate::models::ArchivePeriod;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TDBUDGET_DIR";

/// Manages all paths used by tdbudget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all tdbudget data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.tdbudget or the override)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to budget.json
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("conf.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path of the monthly archive for a period, e.g. `2_2025.json`
    pub fn archive_file(&self, period: ArchivePeriod) -> PathBuf {
        self.base_dir.join(period.file_name())
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if a budget has been created
    pub fn is_initialized(&self) -> bool {
        self.budget_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".tdbudget"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.budget_file(), temp_dir.path().join("budget.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("conf.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_archive_file_name() {
        let paths = BudgetPaths::with_base_dir(PathBuf::from("/data"));
        let period = ArchivePeriod::new(2025, 2).unwrap();
        assert_eq!(paths.archive_file(period), PathBuf::from("/data/2_2025.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("nested").join("budget"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
