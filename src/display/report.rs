//! Report formatting for terminal output
//!
//! Renders each document section as a table, mirroring the worksheets the
//! xlsx encoder produces.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::reports::{ReportDocument, RowKind, Section};

/// Render a single section with its title
pub fn format_section(section: &Section, currency_symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(section.header.iter().cloned());

    for row in &section.rows {
        match row.kind {
            RowKind::Separator => builder.push_record(section.header.iter().map(|_| String::new())),
            RowKind::SubHeader | RowKind::Data => {
                builder.push_record(row.cells.iter().map(|c| c.render(currency_symbol)))
            }
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n{}\n", section.title, table)
}

/// Render the full report
pub fn format_report(document: &ReportDocument, currency_symbol: &str, degraded: &[String]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Expense report for {} ({})\n\n",
        document.user_email,
        document.period.label()
    ));

    for section in &document.sections {
        output.push_str(&format_section(section, currency_symbol));
        output.push('\n');
    }

    if !degraded.is_empty() {
        output.push_str("Warning: some figures could not be computed and show defaults:\n");
        for item in degraded {
            output.push_str(&format!("  - {}\n", item));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ReportPeriod};
    use crate::reports::{Cell, Row};

    #[test]
    fn test_format_section_renders_cells() {
        let mut section = Section::new("Monthly Summary", &["Metric", "Value"]);
        section.push(vec![
            Cell::text("Total Income"),
            Cell::Currency(Money::from_units(5000)),
        ]);
        section.rows.push(Row::separator());
        section.rows.push(Row::sub_header(&["Category", "Amount"]));

        let output = format_section(&section, "₹");
        assert!(output.starts_with("Monthly Summary\n"));
        assert!(output.contains("₹5000.00"));
        assert!(output.contains("Category"));
    }

    #[test]
    fn test_format_report_lists_degraded() {
        let document = ReportDocument {
            user_email: "ana@example.com".into(),
            period: ReportPeriod::new(3, 2024),
            sections: vec![],
        };
        let output = format_report(&document, "$", &["total income".to_string()]);
        assert!(output.contains("March 2024"));
        assert!(output.contains("  - total income"));
    }
}
