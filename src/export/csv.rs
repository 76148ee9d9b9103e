//! CSV encoder
//!
//! Writes all sections into one CSV stream. Each section starts with its
//! title on a row of its own and ends with a blank row.

use crate::error::{ReportError, ReportResult};
use crate::reports::{Cell, ReportDocument, RowKind};

use super::DocumentEncoder;

/// Flat CSV encoder backed by the `csv` crate
#[derive(Debug, Clone)]
pub struct CsvEncoder {
    currency_symbol: String,
}

impl CsvEncoder {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn field(&self, cell: &Cell) -> String {
        match cell {
            // Two decimals, no symbol
            Cell::Currency(amount) => amount.format_plain(),
            other => other.render(&self.currency_symbol),
        }
    }
}

impl DocumentEncoder for CsvEncoder {
    fn encode(&self, document: &ReportDocument) -> ReportResult<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for section in &document.sections {
            writer.write_record([section.title.as_str()])?;
            writer.write_record(&section.header)?;

            for row in &section.rows {
                match row.kind {
                    RowKind::Separator => writer.write_record([""])?,
                    RowKind::SubHeader | RowKind::Data => {
                        writer.write_record(row.cells.iter().map(|c| self.field(c)))?
                    }
                }
            }

            writer.write_record([""])?;
        }

        writer
            .into_inner()
            .map_err(|e| ReportError::Encoding(format!("Failed to flush CSV output: {}", e)))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ReportPeriod};
    use crate::reports::{Row, Section};

    #[test]
    fn test_encode_sections() {
        let mut summary = Section::new("Monthly Summary", &["Metric", "Value"]);
        summary.push(vec![
            Cell::text("Net Savings"),
            Cell::Currency(Money::from_cents(380050)),
        ]);
        summary.rows.push(Row::separator());
        summary.rows.push(Row::sub_header(&["Category", "Amount"]));

        let mut budget = Section::new("Budget vs Actual", &["Category", "Budget"]);
        budget.push(vec![Cell::text("Rent, flat"), Cell::placeholder()]);

        let document = ReportDocument {
            user_email: "a@b.c".into(),
            period: ReportPeriod::new(3, 2024),
            sections: vec![summary, budget],
        };

        let bytes = CsvEncoder::new("₹").encode(&document).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Monthly Summary");
        assert_eq!(lines[1], "Metric,Value");
        assert_eq!(lines[2], "Net Savings,3800.50");
        assert_eq!(lines[4], "Category,Amount");
        assert_eq!(lines[6], "Budget vs Actual");
        assert_eq!(lines[8], "\"Rent, flat\",N/A");
    }
}
