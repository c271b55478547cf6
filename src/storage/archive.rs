//! Monthly archives
//!
//! Each rollover leaves behind a full copy of the budget as it stood at the
//! end of the month, in the same format as `budget.json`, named
//! `<month>_<year>.json`. Writing the same month twice replaces the earlier
//! file.

use std::fs;
use std::path::PathBuf;

use super::file_io::{read_json_required, write_json_atomic};
use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ArchivePeriod, Budget, BudgetDocument};
use crate::services::Archive;

/// Metadata about an archive file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    pub period: ArchivePeriod,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Reads and writes monthly archive files
pub struct ArchiveStore {
    paths: BudgetPaths,
}

impl ArchiveStore {
    pub fn new(paths: BudgetPaths) -> Self {
        Self { paths }
    }

    /// Write a rollover snapshot, returning the file it went to
    pub fn write(&self, archive: &Archive) -> BudgetResult<PathBuf> {
        let path = self.paths.archive_file(archive.period);
        write_json_atomic(&path, &archive.budget)?;
        Ok(path)
    }

    /// Load the archived budget for a month
    pub fn read(&self, period: ArchivePeriod) -> BudgetResult<Budget> {
        let path = self.paths.archive_file(period);
        if !path.exists() {
            return Err(BudgetError::Storage(format!("No archive for {}", period)));
        }
        let document: BudgetDocument = read_json_required(&path)?;
        Budget::try_from(document)
    }

    /// List archives, newest first
    pub fn list(&self) -> BudgetResult<Vec<ArchiveInfo>> {
        let dir = self.paths.base_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut archives = Vec::new();

        for entry in fs::read_dir(dir)
            .map_err(|e| BudgetError::Io(format!("Failed to read data directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| BudgetError::Io(format!("Failed to read directory entry: {}", e)))?;

            let file_name = entry.file_name();
            let Some(period) = ArchivePeriod::from_file_name(&file_name.to_string_lossy()) else {
                continue;
            };

            let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
            archives.push(ArchiveInfo {
                period,
                path: entry.path(),
                size_bytes,
            });
        }

        archives.sort_by(|a, b| b.period.cmp(&a.period));
        Ok(archives)
    }
}
