//! Spending and saving
//!
//! Both operations move money through the slush fund. Saving adds income to
//! slush; spending takes from slush and credits the named category, whichever
//! kind it is. Neither touches a category's target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};

/// When a spend counts as overspending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverspendPolicy {
    /// Warn once slush drops below zero
    Negative,
    /// Warn once slush reaches zero or below
    #[default]
    NonPositive,
}

/// Threshold used when settings don't say otherwise
pub const DEFAULT_OVERSPEND_POLICY: OverspendPolicy = OverspendPolicy::NonPositive;

impl OverspendPolicy {
    pub fn is_overspent(&self, slush: Money) -> bool {
        match self {
            Self::Negative => slush.is_negative(),
            Self::NonPositive => !slush.is_positive(),
        }
    }
}

impl FromStr for OverspendPolicy {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "negative" => Ok(Self::Negative),
            "non_positive" | "non-positive" => Ok(Self::NonPositive),
            other => Err(BudgetError::Config(format!(
                "Unknown overspend policy '{}', expected 'negative' or 'non_positive'",
                other
            ))),
        }
    }
}

impl fmt::Display for OverspendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::NonPositive => write!(f, "non_positive"),
        }
    }
}

/// Non-fatal conditions reported alongside a successful operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// More has been spent than was brought in
    Overspend { slush: Money },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overspend { slush } => write!(
                f,
                "Whoa there. You've spent more money than you brought in (slush is now {}).",
                slush
            ),
        }
    }
}

/// Result of a successful spend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spent {
    pub budget: Budget,
    pub warning: Option<Warning>,
}

/// Record `amount` spent against `category`.
///
/// The category's contribution goes up by `amount` and slush goes down by the
/// same. Negative amounts are corrections and are applied as-is.
pub fn spend(
    budget: &Budget,
    category: &str,
    amount: Money,
    policy: OverspendPolicy,
) -> BudgetResult<Spent> {
    let mut budget = budget.clone();

    let category = category.trim();

    let entry = budget
        .get_mut(category)
        .ok_or_else(|| BudgetError::category_not_found(category))?;
    entry.contribution = entry.contribution.checked_add(amount).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Contribution to '{}' cannot grow by {}: amount out of range",
            category, amount
        ))
    })?;
    budget.adjust_slush(-amount)?;

    let slush = budget.slush();
    let warning = policy
        .is_overspent(slush)
        .then_some(Warning::Overspend { slush });

    Ok(Spent { budget, warning })
}

/// Add `amount` of income to slush. Negative amounts withdraw.
pub fn save(budget: &Budget, amount: Money) -> BudgetResult<Budget> {
    let mut budget = budget.clone();
    budget.adjust_slush(amount)?;
    Ok(budget)
}
