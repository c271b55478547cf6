//! Category model
//!
//! A category is a savings bucket. Monthly buckets are zeroed at every
//! rollover; long-term buckets keep accumulating toward a deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Name that refers to the slush fund rather than a category
pub const SLUSH_TOKEN: &str = "slush";

/// Name that selects every category in a query or clear
pub const ALL_TOKEN: &str = "all";

/// Format deadlines are stored in
pub const DEADLINE_FORMAT: &str = "%m/%d/%Y";

/// Longest accepted category name, in characters
pub const MAX_NAME_LEN: usize = 50;

/// Which list a category lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Reset to zero by every rollover
    Monthly,
    /// Runs until a deadline, never reset
    LongTerm,
}

impl CategoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::LongTerm => "long-term",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique across both kinds
    pub name: String,

    pub kind: CategoryKind,

    /// Amount put toward this category since creation or the last rollover
    pub contribution: Money,

    /// Contribution goal; fixed at creation
    pub target: Money,

    /// Only long-term categories have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Category {
    /// Create a monthly category with nothing contributed yet
    pub fn monthly(name: impl Into<String>, target: Money) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::Monthly,
            contribution: Money::zero(),
            target,
            deadline: None,
        }
    }

    /// Create a long-term category with nothing contributed yet
    pub fn long_term(name: impl Into<String>, target: Money, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::LongTerm,
            contribution: Money::zero(),
            target,
            deadline: Some(deadline),
        }
    }

    /// Whether contributions have gone past the target
    pub fn is_over_target(&self) -> bool {
        self.contribution > self.target
    }

    /// How much is left before the target is reached (zero once over)
    pub fn remaining(&self) -> Money {
        if self.is_over_target() {
            Money::zero()
        } else {
            self.target - self.contribution
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;

        if self.target.is_negative() {
            return Err(CategoryValidationError::NegativeTarget(self.name.clone()));
        }

        if self.kind == CategoryKind::LongTerm && self.deadline.is_none() {
            return Err(CategoryValidationError::MissingDeadline(self.name.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check a name is usable for a category
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if is_reserved(name) {
        return Err(CategoryValidationError::ReservedName(name.to_string()));
    }

    Ok(())
}

/// Check a name for a category being created. Stricter than
/// `validate_name`: budgets on disk may already hold longer names.
pub fn validate_new_name(name: &str) -> Result<(), CategoryValidationError> {
    validate_name(name)?;

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(len));
    }

    Ok(())
}

/// Names that mean something else on the command line
pub fn is_reserved(name: &str) -> bool {
    name == SLUSH_TOKEN || name == ALL_TOKEN
}

/// Parse a deadline given as `MM/DD/YYYY` (or ISO `YYYY-MM-DD`)
pub fn parse_deadline(input: &str) -> Result<NaiveDate, CategoryValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DEADLINE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .map_err(|_| CategoryValidationError::InvalidDeadline(input.to_string()))
}

/// Format a deadline the way it is stored
pub fn format_deadline(date: NaiveDate) -> String {
    date.format(DEADLINE_FORMAT).to_string()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    ReservedName(String),
    NegativeTarget(String),
    MissingDeadline(String),
    InvalidDeadline(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::ReservedName(name) => write!(f, "'{}' is a reserved name", name),
            Self::NegativeTarget(name) => {
                write!(f, "Target for '{}' cannot be negative", name)
            }
            Self::MissingDeadline(name) => {
                write!(f, "Long-term category '{}' needs a deadline", name)
            }
            Self::InvalidDeadline(input) => {
                write!(f, "Invalid deadline '{}', expected MM/DD/YYYY", input)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_monthly() {
        let category = Category::monthly("Food", Money::from_units(200));
        assert_eq!(category.name, "Food");
        assert_eq!(category.kind, CategoryKind::Monthly);
        assert!(category.contribution.is_zero());
        assert!(category.deadline.is_none());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_new_long_term() {
        let category = Category::long_term("Car", Money::from_units(5000), date(2025, 12, 31));
        assert_eq!(category.kind, CategoryKind::LongTerm);
        assert_eq!(category.deadline, Some(date(2025, 12, 31)));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_over_target() {
        let mut category = Category::monthly("Food", Money::from_units(200));
        category.contribution = Money::from_units(200);
        assert!(!category.is_over_target());
        assert_eq!(category.remaining(), Money::zero());

        category.contribution = Money::from_units(250);
        assert!(category.is_over_target());

        category.contribution = Money::from_units(50);
        assert_eq!(category.remaining(), Money::from_units(150));
    }

    #[test]
    fn test_validation() {
        let mut category = Category::monthly("Food", Money::from_units(10));

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "x".repeat(51);
        assert!(category.validate().is_ok());
        assert!(matches!(
            validate_new_name(&category.name),
            Err(CategoryValidationError::NameTooLong(51))
        ));
        assert!(validate_new_name(&"x".repeat(50)).is_ok());

        category.name = SLUSH_TOKEN.into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::ReservedName(_))
        ));

        category.name = "Food".into();
        category.target = Money::from_cents(-1);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NegativeTarget(_))
        ));

        let mut goal = Category::long_term("Car", Money::zero(), date(2030, 1, 1));
        goal.deadline = None;
        assert!(matches!(
            goal.validate(),
            Err(CategoryValidationError::MissingDeadline(_))
        ));
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(parse_deadline("12/31/2025"), Ok(date(2025, 12, 31)));
        assert_eq!(parse_deadline("2025-12-31"), Ok(date(2025, 12, 31)));
        assert!(parse_deadline("31/12/2025").is_err());
        assert!(parse_deadline("02/30/2025").is_err());
        assert!(parse_deadline("someday").is_err());
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(format_deadline(date(2025, 1, 5)), "01/05/2025");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CategoryKind::Monthly.to_string(), "monthly");
        assert_eq!(CategoryKind::LongTerm.to_string(), "long-term");
    }
}
