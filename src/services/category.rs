//! Category management
//!
//! Adding and clearing categories. Clearing works name by name: a name that
//! isn't in the chosen list is reported back and the rest still go through.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::category::validate_new_name;
use crate::models::{Budget, Category, CategoryKind, Money, ALL_TOKEN};

/// A request to create a category, built by the caller from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub kind: CategoryKind,
    pub target: Money,
    /// Required for long-term categories, ignored for monthly ones
    pub deadline: Option<NaiveDate>,
}

impl NewCategory {
    pub fn monthly(name: impl Into<String>, target: Money) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::Monthly,
            target,
            deadline: None,
        }
    }

    pub fn long_term(name: impl Into<String>, target: Money, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::LongTerm,
            target,
            deadline: Some(deadline),
        }
    }
}

/// Which categories a clear or check applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Names(Vec<String>),
}

impl Selection {
    /// Interpret command-line names: nothing or `all` selects everything
    pub fn from_args(names: &[String]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
        if names.is_empty() || names.iter().any(|n| n == ALL_TOKEN) {
            Self::All
        } else {
            Self::Names(names)
        }
    }
}

/// Pick the single list a clear applies to from the two command-line flags
pub fn scope_from_flags(monthly: bool, long_term: bool) -> BudgetResult<CategoryKind> {
    match (monthly, long_term) {
        (true, false) => Ok(CategoryKind::Monthly),
        (false, true) => Ok(CategoryKind::LongTerm),
        _ => Err(BudgetError::ScopeRequired),
    }
}

/// Create a category with nothing contributed yet.
///
/// The name is trimmed. Fails with `DuplicateCategory` if either list
/// already has the name; existing categories are never modified.
pub fn add_category(budget: &Budget, request: NewCategory) -> BudgetResult<Budget> {
    let name = request.name.trim().to_string();
    validate_new_name(&name)?;

    let category = match request.kind {
        CategoryKind::Monthly => Category::monthly(name, request.target),
        CategoryKind::LongTerm => {
            let deadline = request.deadline.ok_or_else(|| {
                BudgetError::Validation(format!("Long-term category '{}' needs a deadline", name))
            })?;
            Category::long_term(name, request.target, deadline)
        }
    };

    let mut budget = budget.clone();
    budget.insert(category)?;
    Ok(budget)
}

/// Result of clearing categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleared {
    pub budget: Budget,
    /// Categories that were removed, in the order processed
    pub removed: Vec<Category>,
    /// Requested names that weren't in the chosen list
    pub not_found: Vec<String>,
}

/// Remove categories from one list. The other list is never touched.
pub fn clear_categories(budget: &Budget, scope: CategoryKind, selection: &Selection) -> Cleared {
    let mut budget = budget.clone();
    let mut removed = Vec::new();
    let mut not_found = Vec::new();

    match selection {
        Selection::All => removed = budget.drain_kind(scope),
        Selection::Names(names) => {
            for name in names {
                match budget.remove(scope, name) {
                    Some(category) => removed.push(category),
                    None => not_found.push(name.clone()),
                }
            }
        }
    }

    Cleared {
        budget,
        removed,
        not_found,
    }
}
