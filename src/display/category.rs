//! Category display formatting
//!
//! Formats check results and category changes for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::category::format_deadline;
use crate::models::{Category, Money};
use crate::services::{CheckReport, CheckRow, Cleared};

#[derive(Tabled)]
struct CheckLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Contributed")]
    contribution: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "")]
    status: String,
}

impl CheckLine {
    fn new(row: &CheckRow, symbol: &str) -> Self {
        let remaining = if row.over_target {
            Money::zero()
        } else {
            row.target - row.contribution
        };

        Self {
            name: row.name.clone(),
            kind: row.kind.to_string(),
            contribution: row.contribution.format_with_symbol(symbol),
            target: row.target.format_with_symbol(symbol),
            remaining: remaining.format_with_symbol(symbol),
            deadline: row.deadline.map(format_deadline).unwrap_or_else(|| "-".into()),
            status: if row.over_target {
                "OVER TARGET".into()
            } else {
                String::new()
            },
        }
    }
}

/// Format the result of a check query
pub fn format_check_report(report: &CheckReport, symbol: &str) -> String {
    let mut output = String::new();

    if let Some(slush) = report.slush {
        output.push_str(&format!(
            "You have {} in free funds\n",
            slush.format_with_symbol(symbol)
        ));
    }

    if !report.rows.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        let lines: Vec<CheckLine> = report.rows.iter().map(|r| CheckLine::new(r, symbol)).collect();
        output.push_str(&Table::new(lines).with(Style::sharp()).to_string());
        output.push('\n');
    }

    if output.is_empty() && report.not_found.is_empty() {
        output.push_str("No categories yet. Add one with 'tdbudget add'.\n");
    }

    output
}

/// One-line confirmation for a newly added category
pub fn format_added(category: &Category, symbol: &str) -> String {
    match category.deadline {
        Some(deadline) => format!(
            "Added {} category '{}' with a target of {} by {}",
            category.kind,
            category.name,
            category.target.format_with_symbol(symbol),
            format_deadline(deadline)
        ),
        None => format!(
            "Added {} category '{}' with a target of {}",
            category.kind,
            category.name,
            category.target.format_with_symbol(symbol)
        ),
    }
}

/// Summary of a clear
pub fn format_cleared(cleared: &Cleared) -> String {
    if cleared.removed.is_empty() {
        return "No categories removed.".to_string();
    }

    let names: Vec<&str> = cleared.removed.iter().map(|c| c.name.as_str()).collect();
    format!("Removed {}: {}", plural(names.len()), names.join(", "))
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 category".to_string()
    } else {
        format!("{} categories", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, CategoryKind};
    use crate::services::{check, clear_categories, Selection};

    fn budget() -> Budget {
        let mut food = Category::monthly("Food", Money::from_units(200));
        food.contribution = Money::from_units(250);
        let rent = Category::monthly("Rent", Money::from_units(900));
        Budget::from_parts(Money::from_units(70), vec![food, rent]).unwrap()
    }

    #[test]
    fn test_check_report_all() {
        let report = check(&budget(), &Selection::All);
        let text = format_check_report(&report, "$");

        assert!(text.starts_with("You have $70.00 in free funds"));
        assert!(text.contains("Food"));
        assert!(text.contains("$250.00"));
        assert!(text.contains("OVER TARGET"));
        assert_eq!(text.matches("OVER TARGET").count(), 1);
    }

    #[test]
    fn test_check_report_slush_only() {
        let report = check(&budget(), &Selection::Names(vec!["slush".into()]));
        assert_eq!(format_check_report(&report, "€"), "You have €70.00 in free funds\n");
    }

    #[test]
    fn test_check_report_empty_budget() {
        let report = CheckReport::default();
        assert!(format_check_report(&report, "$").contains("tdbudget add"));
    }

    #[test]
    fn test_format_added() {
        let category = Category::monthly("Gym", Money::from_units(30));
        assert_eq!(
            format_added(&category, "$"),
            "Added monthly category 'Gym' with a target of $30.00"
        );
    }

    #[test]
    fn test_format_cleared() {
        let cleared = clear_categories(&budget(), CategoryKind::Monthly, &Selection::All);
        assert_eq!(format_cleared(&cleared), "Removed 2 categories: Food, Rent");
    }
}
