//! XLSX encoder
//!
//! Writes each report section to its own worksheet: a styled header row,
//! then the section rows with typed number formats.

use chrono::Datelike;
use rust_xlsxwriter::{Color, ExcelDateTime, Format, FormatBorder, FormatPattern, Workbook, Worksheet};

use crate::error::ReportResult;
use crate::reports::{Cell, ReportDocument, Row, RowKind, Section};

use super::DocumentEncoder;

const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Number formats shared by every worksheet in one workbook
struct Formats {
    header: Format,
    sub_header: Format,
    currency: Format,
    date: Format,
    percentage: Format,
}

impl Formats {
    fn new(currency_symbol: &str) -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::Blue)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        Self {
            sub_header: header.clone(),
            header,
            currency: Format::new().set_num_format(currency_pattern(currency_symbol)),
            date: Format::new().set_num_format("mm/dd/yyyy"),
            percentage: Format::new().set_num_format("0.00%"),
        }
    }
}

/// Excel number format for a currency symbol, e.g. `"₹"#,##0.00`
fn currency_pattern(symbol: &str) -> String {
    if symbol.is_empty() {
        "#,##0.00".to_string()
    } else {
        format!("\"{}\"#,##0.00", symbol.replace('"', ""))
    }
}

/// Spreadsheet encoder backed by `rust_xlsxwriter`
#[derive(Debug, Clone)]
pub struct XlsxEncoder {
    currency_symbol: String,
}

impl XlsxEncoder {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn write_section(
        &self,
        worksheet: &mut Worksheet,
        section: &Section,
        formats: &Formats,
    ) -> ReportResult<()> {
        for (col, title) in section.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &formats.header)?;
        }

        for (index, row) in section.rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            self.write_row(worksheet, row_num, row, formats)?;
        }

        worksheet.autofit();
        Ok(())
    }

    fn write_row(
        &self,
        worksheet: &mut Worksheet,
        row_num: u32,
        row: &Row,
        formats: &Formats,
    ) -> ReportResult<()> {
        match row.kind {
            RowKind::Separator => Ok(()),
            RowKind::SubHeader => {
                for (col, cell) in row.cells.iter().enumerate() {
                    let label = cell.render(&self.currency_symbol);
                    worksheet.write_string_with_format(
                        row_num,
                        col as u16,
                        label,
                        &formats.sub_header,
                    )?;
                }
                Ok(())
            }
            RowKind::Data => {
                for (col, cell) in row.cells.iter().enumerate() {
                    write_cell(worksheet, row_num, col as u16, cell, formats)?;
                }
                Ok(())
            }
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    formats: &Formats,
) -> ReportResult<()> {
    match cell {
        // Empty text is left as a blank cell
        Cell::Text(s) | Cell::Placeholder(s) if s.is_empty() => {}
        Cell::Text(s) | Cell::Placeholder(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Cell::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        Cell::Currency(amount) => {
            worksheet.write_number_with_format(row, col, amount.as_f64(), &formats.currency)?;
        }
        Cell::Date(date) => {
            let datetime =
                ExcelDateTime::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)?;
            worksheet.write_datetime_with_format(row, col, &datetime, &formats.date)?;
        }
        Cell::Percentage(ratio) => {
            worksheet.write_number_with_format(row, col, *ratio, &formats.percentage)?;
        }
    }
    Ok(())
}

impl DocumentEncoder for XlsxEncoder {
    fn encode(&self, document: &ReportDocument) -> ReportResult<Vec<u8>> {
        let formats = Formats::new(&self.currency_symbol);
        let mut workbook = Workbook::new();

        for section in &document.sections {
            let worksheet = workbook.add_worksheet().set_name(&section.title)?;
            self.write_section(worksheet, section, &formats)?;
        }

        let bytes = workbook.save_to_buffer()?;
        tracing::debug!(
            sheets = document.sections.len(),
            bytes = bytes.len(),
            "encoded xlsx workbook"
        );
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}
