//! Display formatting for terminal output
//!
//! Plain text and tables; nothing here reads or writes the budget.

pub mod category;
pub mod report;

pub use category::{format_added, format_check_report, format_cleared};
pub use report::{format_audit_log, format_history, format_rollover};
