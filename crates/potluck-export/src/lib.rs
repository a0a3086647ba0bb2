//! Spreadsheet export of the consolidated shopping list.
//!
//! The workbook holds a single worksheet with a header row
//! (`Ingredient`, `Unit`, `Total Quantity`) followed by one row per
//! [`ShoppingListLine`] in the order given.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use potluck_core::ShoppingListLine;

/// Media type of the produced workbook.
pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header row, in column order.
pub const COLUMNS: [&str; 3] = ["Ingredient", "Unit", "Total Quantity"];

/// Errors that can occur while producing a workbook.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("failed to write workbook: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Renders the shopping list as an in-memory `.xlsx` workbook.
///
/// An empty list yields a workbook with only the header row.
pub fn export_shopping_list(lines: &[ShoppingListLine], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, title) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, title, &bold)?;
    }
    for (row, line) in (1u32..).zip(lines) {
        sheet.write_string(row, 0, &line.ingredient)?;
        sheet.write_string(row, 1, &line.unit)?;
        sheet.write_number(row, 2, line.total_quantity)?;
    }

    let bytes = workbook.save_to_buffer()?;
    info!(rows = lines.len(), bytes = bytes.len(), "shopping list exported");
    Ok(bytes)
}

/// Renders the shopping list and writes it to `path`.
pub fn write_shopping_list(
    lines: &[ShoppingListLine],
    sheet_name: &str,
    path: &Path,
) -> Result<()> {
    let bytes = export_shopping_list(lines, sheet_name)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const SHEET: &str = "Shopping List";

    fn line(ingredient: &str, unit: &str, total_quantity: f64) -> ShoppingListLine {
        ShoppingListLine {
            ingredient: ingredient.into(),
            unit: unit.into(),
            total_quantity,
        }
    }

    fn read_back(bytes: Vec<u8>, sheet: &str) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![sheet.to_string()]);
        let range = workbook.worksheet_range(sheet).unwrap();
        range.rows().map(|r| r.to_vec()).collect()
    }

    fn header() -> Vec<Data> {
        COLUMNS.iter().map(|c| Data::String(c.to_string())).collect()
    }

    #[test]
    fn workbook_lists_every_line_after_header() {
        let lines = vec![line("flour", "cups", 3.0), line("salt", "g", 5.5)];
        let bytes = export_shopping_list(&lines, SHEET).unwrap();

        let rows = read_back(bytes, SHEET);
        assert_eq!(
            rows,
            vec![
                header(),
                vec![
                    Data::String("flour".into()),
                    Data::String("cups".into()),
                    Data::Float(3.0),
                ],
                vec![
                    Data::String("salt".into()),
                    Data::String("g".into()),
                    Data::Float(5.5),
                ],
            ]
        );
    }

    #[test]
    fn empty_list_has_only_header() {
        let bytes = export_shopping_list(&[], SHEET).unwrap();
        assert_eq!(read_back(bytes, SHEET), vec![header()]);
    }

    #[test]
    fn custom_sheet_name() {
        let bytes = export_shopping_list(&[line("rice", "kg", 1.0)], "Groceries").unwrap();
        assert_eq!(read_back(bytes, "Groceries").len(), 2);
    }

    #[test]
    fn invalid_sheet_name_is_error() {
        let err = export_shopping_list(&[], "bad/name").unwrap_err();
        assert!(matches!(err, ExportError::Xlsx(_)));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping_list.xlsx");
        write_shopping_list(&[line("rice", "kg", 1.0)], SHEET, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(read_back(bytes, SHEET).len(), 2);
    }
}
