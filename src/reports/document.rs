//! In-memory report document
//!
//! Sections hold typed cells; encoders decide how each cell kind is
//! rendered (number formats, text, etc.).

use chrono::NaiveDate;

use crate::models::{Money, ReportPeriod};

/// Text shown where a value is not available
pub const PLACEHOLDER: &str = "N/A";

/// One typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Currency(Money),
    Date(NaiveDate),
    /// A ratio, so 0.5 renders as 50%
    Percentage(f64),
    Placeholder(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn placeholder() -> Self {
        Self::Placeholder(PLACEHOLDER.to_string())
    }

    pub fn count(value: u64) -> Self {
        Self::Number(value as f64)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn as_currency(&self) -> Option<Money> {
        match self {
            Self::Currency(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Placeholder(s) => Some(s),
            _ => None,
        }
    }

    /// Plain-text rendering used by the terminal view and the CSV encoder
    pub fn render(&self, currency_symbol: &str) -> String {
        match self {
            Self::Text(s) | Self::Placeholder(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Self::Number(n) => format!("{:.2}", n),
            Self::Currency(m) => m.format_with_symbol(currency_symbol),
            Self::Date(d) => d.format("%m/%d/%Y").to_string(),
            Self::Percentage(p) => format!("{:.2}%", p * 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Data,
    /// A styled label row inside a section
    SubHeader,
    /// Blank spacer row
    Separator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn data(cells: Vec<Cell>) -> Self {
        Self {
            kind: RowKind::Data,
            cells,
        }
    }

    pub fn sub_header(labels: &[&str]) -> Self {
        Self {
            kind: RowKind::SubHeader,
            cells: labels.iter().map(|l| Cell::text(*l)).collect(),
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: RowKind::Separator,
            cells: Vec::new(),
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind == RowKind::Data
    }
}

/// A titled table with a header row
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(title: impl Into<String>, header: &[&str]) -> Self {
        Self {
            title: title.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, cells: Vec<Cell>) {
        self.rows.push(Row::data(cells));
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.is_data())
    }

    /// Data rows that follow the first sub-header row
    pub fn rows_after_sub_header(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .skip_while(|r| r.kind != RowKind::SubHeader)
            .skip(1)
            .filter(|r| r.is_data())
    }

    /// First data row whose leading cell is the given text
    pub fn find_row(&self, label: &str) -> Option<&Row> {
        self.data_rows()
            .find(|r| r.cells.first().and_then(Cell::as_text) == Some(label))
    }
}

/// A complete report, ready for an encoder
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub user_email: String,
    pub period: ReportPeriod,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_render() {
        assert_eq!(Cell::count(3).render("$"), "3");
        assert_eq!(Cell::Number(1.5).render("$"), "1.50");
        assert_eq!(Cell::Currency(Money::from_cents(123456)).render("$"), "$1234.56");
        assert_eq!(Cell::Percentage(0.25).render("$"), "25.00%");
        assert_eq!(
            Cell::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).render("$"),
            "03/05/2024"
        );
        assert_eq!(Cell::placeholder().render("$"), "N/A");
    }

    #[test]
    fn test_section_queries() {
        let mut section = Section::new("Summary", &["Metric", "Value"]);
        section.push(vec![Cell::text("Total Income"), Cell::Currency(Money::zero())]);
        section.rows.push(Row::separator());
        section.rows.push(Row::sub_header(&["Category", "Amount"]));
        section.push(vec![Cell::text("Rent"), Cell::Currency(Money::from_units(5))]);

        assert_eq!(section.data_rows().count(), 2);
        assert_eq!(section.rows_after_sub_header().count(), 1);
        assert!(section.find_row("Rent").is_some());
        assert!(section.find_row("Category").is_none());
    }
}
