//! Progress queries
//!
//! Read-only. Produces one row per resolved category plus the slush balance
//! when it was asked for; the caller decides how to show it.

use chrono::NaiveDate;

use super::category::Selection;
use crate::models::{Budget, Category, CategoryKind, Money, SLUSH_TOKEN};

/// Progress of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub name: String,
    pub kind: CategoryKind,
    pub contribution: Money,
    pub target: Money,
    pub deadline: Option<NaiveDate>,
    pub over_target: bool,
}

impl From<&Category> for CheckRow {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            kind: category.kind,
            contribution: category.contribution,
            target: category.target,
            deadline: category.deadline,
            over_target: category.is_over_target(),
        }
    }
}

/// Answer to a check query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Present when slush was requested (explicitly or through `all`)
    pub slush: Option<Money>,
    /// Rows in request order, or budget order for `all`
    pub rows: Vec<CheckRow>,
    /// Requested names that matched nothing
    pub not_found: Vec<String>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.not_found.is_empty()
    }
}

/// Report progress for the selected categories
pub fn check(budget: &Budget, selection: &Selection) -> CheckReport {
    match selection {
        Selection::All => CheckReport {
            slush: Some(budget.slush()),
            rows: budget.categories().map(CheckRow::from).collect(),
            not_found: Vec::new(),
        },
        Selection::Names(names) => {
            let mut report = CheckReport::default();
            for name in names {
                if name == SLUSH_TOKEN {
                    report.slush = Some(budget.slush());
                    continue;
                }
                match budget.get(name) {
                    Some(category) => report.rows.push(CheckRow::from(category)),
                    None => report.not_found.push(name.clone()),
                }
            }
            report
        }
    }
}
