//! Budget operations
//!
//! Every operation here is a pure function: it takes the current budget by
//! reference and hands back a new one (or an error), leaving the input as it
//! was. Loading, saving and printing are left to the caller.

pub mod category;
pub mod check;
pub mod ledger;
pub mod rollover;

pub use category::{add_category, clear_categories, scope_from_flags, Cleared, NewCategory, Selection};
pub use check::{check, CheckReport, CheckRow};
pub use ledger::{save, spend, OverspendPolicy, Spent, Warning, DEFAULT_OVERSPEND_POLICY};
pub use rollover::{rollover, Archive, Rollover};
