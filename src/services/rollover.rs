//! Monthly rollover
//!
//! Snapshots the budget as it stood at the end of the month, then zeroes every
//! monthly contribution. Long-term categories and slush carry over unchanged.
//! Calling it twice in one month is allowed and yields a second snapshot;
//! keeping to one run per month is the scheduler's job.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::period::previous_month;
use crate::models::{ArchivePeriod, Budget};

/// Budget as it stood before a rollover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// `now` moved back one month, day clamped to that month's length
    pub date: NaiveDate,
    pub period: ArchivePeriod,
    pub budget: Budget,
}

/// Result of a rollover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollover {
    pub archive: Archive,
    pub budget: Budget,
}

/// Roll monthly categories over as of `now`
pub fn rollover(budget: &Budget, now: NaiveDate) -> BudgetResult<Rollover> {
    let date = previous_month(now)
        .ok_or_else(|| BudgetError::Validation(format!("Cannot roll back a month from {}", now)))?;

    let archive = Archive {
        date,
        period: ArchivePeriod::containing(date),
        budget: budget.clone(),
    };

    let mut budget = budget.clone();
    budget.reset_monthly();

    Ok(Rollover { archive, budget })
}
