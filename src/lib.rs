//! tdbudget - command-line budgeting with slush funds and savings buckets
//!
//! Income goes into a shared pool ("slush"). Spending is taken out of slush
//! and credited to a category, either a monthly bucket that is reset every
//! month or a long-term goal with a deadline.
//!
//! # Architecture
//!
//! - `models`: the budget aggregate and its invariants
//! - `services`: pure operations (spend, save, add, clear, check, rollover)
//! - `storage`: JSON file storage and monthly archives
//! - `config`: data directory and user settings
//! - `audit`: append-only log of changes
//! - `display`: terminal formatting
//! - `cli`: command handlers used by the binary
//!
//! # Example
//!
//! ```
//! use tdbudget::models::{Budget, Money};
//! use tdbudget::services::{add_category, save, spend, NewCategory, DEFAULT_OVERSPEND_POLICY};
//!
//! let budget = save(&Budget::new(), Money::from_units(100))?;
//! let budget = add_category(&budget, NewCategory::monthly("Food", Money::from_units(200)))?;
//! let spent = spend(&budget, "Food", Money::from_units(30), DEFAULT_OVERSPEND_POLICY)?;
//! assert_eq!(spent.budget.slush(), Money::from_units(70));
//! # Ok::<(), tdbudget::BudgetError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
