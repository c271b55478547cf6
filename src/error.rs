//! Custom error types for tdbudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::category::CategoryValidationError;

/// The main error type for tdbudget operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and requests
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name did not resolve to any category
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A category with this name already exists (in either list)
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// A name resolves to more than one category. Only possible with a
    /// corrupted budget file.
    #[error("Category '{0}' appears more than once in the budget; the budget file is corrupt")]
    AmbiguousCategory(String),

    /// A category name collides with a reserved keyword
    #[error("'{0}' is a reserved name and cannot be used for a category")]
    ReservedName(String),

    /// Exactly one of monthly / long-term must be chosen
    #[error("Choose exactly one scope: --monthly or --long-term")]
    ScopeRequired,

    /// The budget has not been created yet
    #[error("No budget found at {}. Run 'tdbudget init' first.", .0.display())]
    NotInitialized(PathBuf),

    /// A budget already exists where `init` would write one
    #[error("A budget already exists at {}. Use --force to overwrite it.", .0.display())]
    AlreadyInitialized(PathBuf),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for a category name
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound(name.into())
    }

    /// Create a "duplicate" error for a category name
    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::DuplicateCategory(name.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_) | Self::NotInitialized(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::ReservedName(_) | Self::DuplicateCategory(_)
        )
    }

    /// Errors that mean the persisted state itself can't be trusted.
    /// Batch processing must stop on these.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AmbiguousCategory(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<CategoryValidationError> for BudgetError {
    fn from(err: CategoryValidationError) -> Self {
        match err {
            CategoryValidationError::ReservedName(name) => Self::ReservedName(name),
            other => Self::Validation(other.to_string()),
        }
    }
}

/// Result type alias for tdbudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("Food");
        assert_eq!(err.to_string(), "Category not found: Food");
        assert!(err.is_not_found());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_ambiguous_is_fatal() {
        let err = BudgetError::AmbiguousCategory("Food".into());
        assert!(err.is_fatal());
        assert!(err.to_string().contains("corrupt"));
    }

    #[test]
    fn test_not_initialized_mentions_init() {
        let err = BudgetError::NotInitialized(PathBuf::from("/tmp/x/budget.json"));
        assert!(err.to_string().contains("tdbudget init"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
