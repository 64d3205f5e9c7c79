//! Excel workbook output.
//!
//! Prices use a two-decimal number format. Summary cells are written as
//! formulas with their computed value cached, and the spread percentage
//! column is filled by band through conditional formats: red for high,
//! yellow for medium, green for low.

use std::path::Path;

use rust_xlsxwriter::{
    Color, ConditionalFormatFormula, Format, FormatAlign, Formula, Workbook, Worksheet, XlsxError,
};

use pricelist_model::SeverityBand;

use crate::context::ColumnWidths;
use crate::error::{ReportError, Result};
use crate::layout::{Cell, Table};

const DECIMAL_FORMAT: &str = "0.00";

/// Longest sheet name Excel accepts.
const MAX_SHEET_NAME: usize = 31;

struct Styles {
    header: Format,
    text: Format,
    decimal: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_text_wrap()
                .set_align(FormatAlign::VerticalCenter),
            text: Format::new(),
            decimal: Format::new().set_num_format(DECIMAL_FORMAT),
        }
    }
}

fn band_fill(band: SeverityBand) -> Format {
    let color = match band {
        SeverityBand::Low => Color::RGB(0x00FF00),
        SeverityBand::Medium => Color::RGB(0xFFFF00),
        SeverityBand::High => Color::RGB(0xFF0000),
    };
    Format::new().set_background_color(color)
}

/// Writes a table as a single-sheet workbook.
pub fn write_xlsx(path: &Path, table: &Table, widths: &ColumnWidths) -> Result<()> {
    let to_err = |source| ReportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(sheet_name(&table.sheet_name))
        .map_err(to_err)?;
    fill_sheet(worksheet, table, widths).map_err(to_err)?;
    workbook.save(path).map_err(to_err)
}

fn fill_sheet(
    worksheet: &mut Worksheet,
    table: &Table,
    widths: &ColumnWidths,
) -> std::result::Result<(), XlsxError> {
    let styles = Styles::new();
    // Unevaluated empty results stay blank instead of showing 0.
    worksheet.set_formula_result_default("");

    for col in 0..table.column_count() {
        let width = match col {
            0 => widths.name,
            1 => widths.quantity,
            _ => widths.value,
        };
        worksheet.set_column_width(col as u16, width)?;
    }
    worksheet.set_row_height(0, widths.header_height)?;

    for (col, header) in table.headers.iter().enumerate() {
        if !header.is_empty() {
            worksheet.write_string_with_format(0, col as u16, header, &styles.header)?;
        }
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(row_num, col, value)?;
                }
                Cell::Price(value) | Cell::Amount(value) => {
                    worksheet.write_number_with_format(row_num, col, *value, &styles.decimal)?;
                }
                Cell::Formula { formula, value } => {
                    let format = match value.as_ref() {
                        Cell::Text(_) => &styles.text,
                        _ => &styles.decimal,
                    };
                    let formula = Formula::new(formula).set_result(value.cached_result());
                    worksheet.write_formula_with_format(row_num, col, formula, format)?;
                }
            }
        }
    }

    if let Some(highlight) = &table.highlight
        && !table.rows.is_empty()
    {
        let col = highlight.column as u16;
        let last_row = table.rows.len() as u32;
        for (band, rule) in &highlight.rules {
            let conditional = ConditionalFormatFormula::new()
                .set_rule(rule.as_str())
                .set_format(band_fill(*band));
            worksheet.add_conditional_format(1, col, last_row, col, &conditional)?;
        }
    }

    if table.autofilter && table.column_count() > 0 {
        let last_col = (table.column_count() - 1) as u16;
        worksheet.autofilter(0, 0, table.rows.len() as u32, last_col)?;
    }
    Ok(())
}

/// Makes a bucket name acceptable as an Excel sheet name.
fn sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME)
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    if cleaned.trim().is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name() {
        assert_eq!(sheet_name("Geral"), "Geral");
        assert_eq!(sheet_name("A/B: C?"), "A_B_ C_");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), MAX_SHEET_NAME);
        assert_eq!(sheet_name("''"), "Sheet1");
    }
}
