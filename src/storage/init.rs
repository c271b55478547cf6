//! Storage initialization
//!
//! Creates the data directory and an empty budget on first run.

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

use super::file_io::write_json_atomic;

/// Write a fresh, empty budget
///
/// An existing budget is only replaced when `force` is set.
pub fn initialize_storage(paths: &BudgetPaths, force: bool) -> BudgetResult<Budget> {
    paths.ensure_directories()?;

    let budget_file = paths.budget_file();
    if budget_file.exists() && !force {
        return Err(BudgetError::AlreadyInitialized(budget_file));
    }

    let budget = Budget::new();
    write_json_atomic(&budget_file, &budget)?;
    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_empty_budget() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("tdbudget"));

        initialize_storage(&paths, false).unwrap();

        let loaded = Storage::new(paths).load_budget().unwrap();
        assert_eq!(loaded, Budget::new());
    }

    #[test]
    fn test_initialize_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.budget_file(), "keep me").unwrap();

        assert!(matches!(
            initialize_storage(&paths, false),
            Err(BudgetError::AlreadyInitialized(_))
        ));
        assert_eq!(std::fs::read_to_string(paths.budget_file()).unwrap(), "keep me");

        initialize_storage(&paths, true).unwrap();
        assert_ne!(std::fs::read_to_string(paths.budget_file()).unwrap(), "keep me");
    }
}
