// FILENAME: core/persistence/src/xlsx_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::{CellValue, Grid, Sheet, Workbook};
use std::path::Path;

/// Loads every sheet of an `.xlsx` workbook into in-memory grids.
///
/// Conversion from the file format's cell types happens here and nowhere
/// else; the engine crates only ever see `CellValue`. A failure to open or
/// parse the file is reported before any block scanning can begin.
pub fn load_workbook(path: &Path) -> Result<Workbook, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    if sheet_names.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let mut sheets = Vec::new();

    for sheet_name in &sheet_names {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

        let mut grid = Grid::with_dimensions(range.height() as u32, range.width() as u32);

        for (row_idx, row) in range.rows().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let value = match cell {
                    Data::Empty => continue,
                    Data::String(s) => CellValue::Text(s.clone()),
                    Data::Float(f) => CellValue::Number(*f),
                    Data::Int(i) => CellValue::Number(*i as f64),
                    Data::Bool(b) => CellValue::Boolean(*b),
                    Data::Error(e) => CellValue::Error(format!("{:?}", e)),
                    Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
                    Data::DateTimeIso(s) => CellValue::Text(s.clone()),
                    Data::DurationIso(s) => CellValue::Text(s.clone()),
                };

                grid.set_cell(row_idx as u32, col_idx as u32, value);
            }
        }

        sheets.push(Sheet::new(sheet_name.clone(), grid));
    }

    Ok(Workbook { sheets })
}
