//! Audit logging for tdbudget
//!
//! Every command that changes the budget or settings appends one line to
//! `audit.log`: a JSON object with a timestamp, the operation, what it was
//! about, and before/after snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use tdbudget::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(
//!     &AuditEntry::new(Operation::Spend)
//!         .subject("Food")
//!         .amount(amount)
//!         .change(&before, &after),
//! )?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
