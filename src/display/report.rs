//! Formatting for archive history and the audit log

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::Budget;
use crate::storage::ArchiveInfo;

#[derive(Tabled)]
struct HistoryLine {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// List archived months
pub fn format_history(archives: &[ArchiveInfo]) -> String {
    if archives.is_empty() {
        return "No monthly archives yet. They are written by 'tdbudget monthly'.".to_string();
    }

    let lines: Vec<HistoryLine> = archives
        .iter()
        .map(|a| HistoryLine {
            month: a.period.to_string(),
            file: a.period.file_name(),
            size: format!("{} B", a.size_bytes),
        })
        .collect();

    Table::new(lines).with(Style::sharp()).to_string()
}

/// Summary printed after a rollover
pub fn format_rollover(archived: &Budget, symbol: &str) -> String {
    let mut output = String::new();
    for category in archived.monthly() {
        output.push_str(&format!(
            "  {}: {} of {}\n",
            category.name,
            category.contribution.format_with_symbol(symbol),
            category.target.format_with_symbol(symbol)
        ));
    }
    if output.is_empty() {
        output.push_str("  (no monthly categories)\n");
    }
    output
}

/// Recent audit entries, oldest first
pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "Audit log is empty.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{ArchivePeriod, Category, Money};
    use std::path::PathBuf;

    #[test]
    fn test_history_empty() {
        assert!(format_history(&[]).contains("tdbudget monthly"));
    }

    #[test]
    fn test_history_lists_months() {
        let archives = vec![ArchiveInfo {
            period: ArchivePeriod::new(2025, 2).unwrap(),
            path: PathBuf::from("/tmp/2_2025.json"),
            size_bytes: 120,
        }];
        let text = format_history(&archives);
        assert!(text.contains("February 2025"));
        assert!(text.contains("2_2025.json"));
    }

    #[test]
    fn test_rollover_summary() {
        let mut food = Category::monthly("Food", Money::from_units(200));
        food.contribution = Money::from_units(120);
        let budget = Budget::from_parts(Money::zero(), vec![food]).unwrap();
        assert_eq!(format_rollover(&budget, "$"), "  Food: $120.00 of $200.00\n");
        assert!(format_rollover(&Budget::new(), "$").contains("no monthly"));
    }

    #[test]
    fn test_audit_log() {
        let entries = vec![
            AuditEntry::new(Operation::Init),
            AuditEntry::new(Operation::Save).amount(Money::from_units(5)),
        ];
        let text = format_audit_log(&entries);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("INIT"));
        assert!(text.contains("SAVE $5.00"));
    }
}
