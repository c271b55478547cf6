//! Storage layer for tdbudget
//!
//! The budget is one JSON document, read whole and written whole with an
//! atomic rename. Monthly archives sit next to it.

pub mod archive;
pub mod file_io;
pub mod init;

pub use archive::{ArchiveInfo, ArchiveStore};
pub use file_io::{read_json_required, write_json_atomic};
pub use init::initialize_storage;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, BudgetDocument};

/// Loads and saves the budget and its archives, and records what changed
pub struct Storage {
    paths: BudgetPaths,
    archives: ArchiveStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance. Touches nothing on disk.
    pub fn new(paths: BudgetPaths) -> Self {
        Self {
            archives: ArchiveStore::new(paths.clone()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    pub fn archives(&self) -> &ArchiveStore {
        &self.archives
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry to the audit log
    pub fn log(&self, entry: &AuditEntry) -> BudgetResult<()> {
        self.paths.ensure_directories()?;
        self.audit.log(entry)
    }

    /// Check if a budget has been created
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Load and validate the budget
    ///
    /// The document is parsed first and validated second so that invariant
    /// violations keep their own error kind (`AmbiguousCategory` in
    /// particular) instead of becoming a parse failure.
    pub fn load_budget(&self) -> BudgetResult<Budget> {
        let path = self.paths.budget_file();
        if !path.exists() {
            return Err(BudgetError::NotInitialized(path));
        }

        let document: BudgetDocument = read_json_required(&path)?;
        Budget::try_from(document)
    }

    /// Persist the budget
    pub fn save_budget(&self, budget: &Budget) -> BudgetResult<()> {
        write_json_atomic(self.paths.budget_file(), budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf()))
    }

    #[test]
    fn test_load_before_init() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        assert!(!storage.is_initialized());
        assert!(matches!(
            storage.load_budget(),
            Err(BudgetError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let budget = Budget::from_parts(
            Money::from_cents(12345),
            vec![Category::monthly("Food", Money::from_units(200))],
        )
        .unwrap();
        storage.save_budget(&budget).unwrap();

        assert!(storage.is_initialized());
        assert_eq!(storage.load_budget().unwrap(), budget);
    }

    #[test]
    fn test_load_corrupt_budget_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        std::fs::write(
            storage.paths().budget_file(),
            r#"{
                "monthly": [{"name": "Food", "contribution": 0, "target": 200}],
                "long_term": [{"name": "Food", "contribution": 0, "target": 1, "deadline": "01/01/2030"}],
                "slush": 0
            }"#,
        )
        .unwrap();

        let err = storage.load_budget().unwrap_err();
        assert_eq!(err, BudgetError::AmbiguousCategory("Food".into()));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_saved_file_has_sorted_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.save_budget(&Budget::new()).unwrap();

        let text = std::fs::read_to_string(storage.paths().budget_file()).unwrap();
        assert_eq!(
            text,
            "{\n    \"long_term\": [],\n    \"monthly\": [],\n    \"slush\": 0.0\n}\n"
        );
    }
}
