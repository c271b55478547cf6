//! Core data models for tdbudget
//!
//! This module contains the data structures of the budgeting domain: the
//! budget aggregate, its categories, money amounts and archive periods.

pub mod budget;
pub mod category;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetDocument, CategoryRecord};
pub use category::{Category, CategoryKind, ALL_TOKEN, SLUSH_TOKEN};
pub use money::Money;
pub use period::ArchivePeriod;
