// FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use consolidate_engine::ConsolidatedTable;
use engine::CellValue;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

/// Writes a consolidated table to a single-sheet `.xlsx` file.
///
/// Row 0 is the header row; data rows follow in table order. `Empty` cells
/// are left blank in the output — the missing marker survives as a blank
/// cell, never as 0 or an empty string.
pub fn save_table(table: &ConsolidatedTable, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();

    for (col, label) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, label)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let out_row = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let out_col = col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet.write_number(out_row, out_col, *n)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(out_row, out_col, s)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(out_row, out_col, *b)?;
                }
                CellValue::Error(e) => {
                    worksheet.write_string(out_row, out_col, e)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    Ok(())
}
