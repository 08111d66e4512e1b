//! FILENAME: core/engine/src/grid.rs
//! PURPOSE: Manages the collection of cells for one worksheet.
//! CONTEXT: This file defines the `Grid` struct which acts as the container
//! for all cell data of a single sheet. It uses a sparse storage strategy
//! (HashMap) since statistical workbooks are mostly blank space between
//! table regions. A Grid is built once by the reader and never mutated
//! afterwards by the consolidation pipeline.

use std::collections::HashMap;

use crate::cell::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A 2-D array of cells. Row and Col are 0-based indices.
///
/// `rows`/`cols` are the logical dimensions of the sheet, which may exceed
/// the bounds of the stored (non-empty) cells: a sheet can end in blank rows
/// that still count toward the scan range.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Sparse storage: keys are (row, col), values are non-empty cells.
    cells: HashMap<(u32, u32), CellValue>,
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Creates a new, empty Grid.
    pub fn new() -> Self {
        Grid {
            cells: HashMap::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a Grid with preset logical dimensions (e.g. from the used
    /// range of a worksheet). Cells are filled in afterwards via `set_cell`.
    pub fn with_dimensions(rows: u32, cols: u32) -> Self {
        Grid {
            cells: HashMap::new(),
            rows,
            cols,
        }
    }

    /// Number of rows in the logical scan range.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the logical scan range.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of non-empty cells actually stored.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Sets a cell at the specified coordinates.
    /// Expands the logical dimensions automatically. Storing `Empty` only
    /// grows the bounds; the sparse map never holds empty cells.
    pub fn set_cell(&mut self, row: u32, col: u32, value: CellValue) {
        if row >= self.rows {
            self.rows = row + 1;
        }
        if col >= self.cols {
            self.cols = col + 1;
        }
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    /// Retrieves the value at the specified coordinates.
    /// Unstored cells read as `Empty`, including cells outside the bounds.
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY_CELL)
    }

    /// Returns the trimmed display string of a cell, or None if the cell is
    /// empty or trims to nothing. This is how block markers, metric labels
    /// and entity names are read out of the grid.
    pub fn trimmed_label(&self, row: u32, col: u32) -> Option<String> {
        let cell = self.cells.get(&(row, col))?;
        let text = cell.display_value();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_expands_bounds() {
        let mut grid = Grid::new();
        grid.set_cell(4, 2, CellValue::Number(1.0));
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn unstored_cells_read_as_empty() {
        let grid = Grid::with_dimensions(10, 10);
        assert_eq!(*grid.value(3, 3), CellValue::Empty);
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn storing_empty_grows_bounds_only() {
        let mut grid = Grid::new();
        grid.set_cell(7, 0, CellValue::Empty);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn trimmed_label_strips_whitespace() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, CellValue::Text("  指标 \n".to_string()));
        grid.set_cell(0, 1, CellValue::Text("   ".to_string()));
        grid.set_cell(0, 2, CellValue::Number(2024.0));

        assert_eq!(grid.trimmed_label(0, 0).as_deref(), Some("指标"));
        assert_eq!(grid.trimmed_label(0, 1), None);
        assert_eq!(grid.trimmed_label(0, 2).as_deref(), Some("2024"));
        assert_eq!(grid.trimmed_label(5, 5), None);
    }
}
