//! The budget aggregate
//!
//! A `Budget` holds the slush fund and every category. Categories are kept in
//! two ordered lists (monthly, long-term) for display, and a single name index
//! maps each name to the one place it lives. Every constructor goes through
//! the same checks, so a `Budget` value always satisfies:
//!
//! - names are non-empty, not reserved, and unique across both lists
//! - targets are non-negative
//! - long-term categories have a deadline, monthly ones don't

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::category::{format_deadline, parse_deadline, Category, CategoryKind};
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// The budget as loaded from and saved to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetDocument", into = "BudgetDocument")]
pub struct Budget {
    slush: Money,
    monthly: Vec<Category>,
    long_term: Vec<Category>,
    index: HashMap<String, (CategoryKind, usize)>,
}

impl Default for Budget {
    fn default() -> Self {
        Self::new()
    }
}

impl Budget {
    /// An empty budget: nothing in slush, no categories
    pub fn new() -> Self {
        Self {
            slush: Money::zero(),
            monthly: Vec::new(),
            long_term: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a budget from a slush balance and categories, checking every
    /// invariant. Categories keep their relative order within each kind.
    ///
    /// A repeated name is reported as `AmbiguousCategory`: data arriving here
    /// comes from storage, so a clash means the stored budget is corrupt.
    pub fn from_parts(
        slush: Money,
        categories: impl IntoIterator<Item = Category>,
    ) -> BudgetResult<Self> {
        let mut budget = Self::new();
        budget.slush = slush;

        for category in categories {
            if budget.contains(&category.name) {
                return Err(BudgetError::AmbiguousCategory(category.name));
            }
            budget.insert(category)?;
        }

        Ok(budget)
    }

    /// Unallocated discretionary balance
    pub fn slush(&self) -> Money {
        self.slush
    }

    /// Monthly categories in the order they were added
    pub fn monthly(&self) -> &[Category] {
        &self.monthly
    }

    /// Long-term categories in the order they were added
    pub fn long_term(&self) -> &[Category] {
        &self.long_term
    }

    /// Categories of one kind
    pub fn of_kind(&self, kind: CategoryKind) -> &[Category] {
        match kind {
            CategoryKind::Monthly => &self.monthly,
            CategoryKind::LongTerm => &self.long_term,
        }
    }

    /// All categories, monthly first
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.monthly.iter().chain(self.long_term.iter())
    }

    /// Number of categories across both kinds
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a category by exact name
    pub fn get(&self, name: &str) -> Option<&Category> {
        let (kind, position) = *self.index.get(name)?;
        self.of_kind(kind).get(position)
    }

    /// Look up a category by exact name, failing with `CategoryNotFound`
    pub fn find_category(&self, name: &str) -> BudgetResult<&Category> {
        self.get(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        let (kind, position) = *self.index.get(name)?;
        self.list_mut(kind).get_mut(position)
    }

    /// Move slush by `delta`. Fails without changing anything if the balance
    /// would leave the supported range.
    pub(crate) fn adjust_slush(&mut self, delta: Money) -> BudgetResult<()> {
        self.slush = self.slush.checked_add(delta).ok_or_else(|| {
            BudgetError::Validation(format!(
                "Slush of {} cannot change by {}: amount out of range",
                self.slush, delta
            ))
        })?;
        Ok(())
    }

    /// Append a category to the end of its kind's list
    ///
    /// Fails with `DuplicateCategory` if the name is taken in either list, or
    /// `Validation` / `ReservedName` if the category itself is invalid. On
    /// error the budget is left as it was.
    pub(crate) fn insert(&mut self, mut category: Category) -> BudgetResult<()> {
        if category.kind == CategoryKind::Monthly {
            category.deadline = None;
        }

        category.validate()?;

        if self.contains(&category.name) {
            return Err(BudgetError::duplicate_category(category.name));
        }

        let kind = category.kind;
        let list = self.list_mut(kind);
        let position = list.len();
        let name = category.name.clone();
        list.push(category);
        self.index.insert(name, (kind, position));
        Ok(())
    }

    /// Remove a category from one kind's list. Returns None if the name is
    /// not in that list (even if it is in the other one).
    pub(crate) fn remove(&mut self, kind: CategoryKind, name: &str) -> Option<Category> {
        match self.index.get(name) {
            Some((found_kind, _)) if *found_kind == kind => {}
            _ => return None,
        }
        let (_, position) = self.index.remove(name)?;
        let removed = self.list_mut(kind).remove(position);
        self.reindex(kind);
        Some(removed)
    }

    /// Remove every category of one kind, returning them in order
    pub(crate) fn drain_kind(&mut self, kind: CategoryKind) -> Vec<Category> {
        let removed: Vec<Category> = self.list_mut(kind).drain(..).collect();
        for category in &removed {
            self.index.remove(&category.name);
        }
        removed
    }

    /// Zero the contribution of every monthly category
    pub(crate) fn reset_monthly(&mut self) {
        for category in &mut self.monthly {
            category.contribution = Money::zero();
        }
    }

    fn list_mut(&mut self, kind: CategoryKind) -> &mut Vec<Category> {
        match kind {
            CategoryKind::Monthly => &mut self.monthly,
            CategoryKind::LongTerm => &mut self.long_term,
        }
    }

    fn reindex(&mut self, kind: CategoryKind) {
        let positions: Vec<(String, usize)> = self
            .of_kind(kind)
            .iter()
            .enumerate()
            .map(|(position, category)| (category.name.clone(), position))
            .collect();
        for (name, position) in positions {
            self.index.insert(name, (kind, position));
        }
    }
}

/// On-disk shape of the budget. Field names and their order are the file
/// format; archives written by earlier versions use exactly these keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDocument {
    pub long_term: Vec<CategoryRecord>,
    pub monthly: Vec<CategoryRecord>,
    pub slush: Money,
}

/// On-disk shape of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub contribution: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub name: String,
    pub target: Money,
}

impl CategoryRecord {
    fn into_category(self, kind: CategoryKind) -> BudgetResult<Category> {
        let deadline = match (kind, self.deadline) {
            (CategoryKind::LongTerm, Some(raw)) => Some(
                parse_deadline(&raw).map_err(|e| {
                    BudgetError::Validation(format!("category '{}': {}", self.name, e))
                })?,
            ),
            (CategoryKind::LongTerm, None) => None,
            // Monthly categories never carry a deadline; ignore stray ones.
            (CategoryKind::Monthly, _) => None,
        };

        Ok(Category {
            name: self.name,
            kind,
            contribution: self.contribution,
            target: self.target,
            deadline,
        })
    }
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            contribution: category.contribution,
            deadline: category.deadline.map(format_deadline),
            name: category.name.clone(),
            target: category.target,
        }
    }
}

impl TryFrom<BudgetDocument> for Budget {
    type Error = BudgetError;

    fn try_from(doc: BudgetDocument) -> Result<Self, Self::Error> {
        let monthly = doc
            .monthly
            .into_iter()
            .map(|record| record.into_category(CategoryKind::Monthly));
        let long_term = doc
            .long_term
            .into_iter()
            .map(|record| record.into_category(CategoryKind::LongTerm));

        let categories = monthly.chain(long_term).collect::<BudgetResult<Vec<_>>>()?;
        Budget::from_parts(doc.slush, categories)
    }
}

impl From<Budget> for BudgetDocument {
    fn from(budget: Budget) -> Self {
        Self {
            long_term: budget.long_term.iter().map(CategoryRecord::from).collect(),
            monthly: budget.monthly.iter().map(CategoryRecord::from).collect(),
            slush: budget.slush,
        }
    }
}
