//! FILENAME: core/engine/src/workbook.rs
//! PURPOSE: Sheet and Workbook containers.
//! CONTEXT: A Workbook is the engine-facing view of an already-parsed file:
//! an ordered sequence of named sheets, each owning one Grid. Sheet order
//! matters — the consolidation fold is defined relative to it.

use crate::grid::Grid;

/// A single worksheet: a name plus its cell grid.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub grid: Grid,
}

impl Sheet {
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Sheet {
            name: name.into(),
            grid,
        }
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Workbook { sheets: Vec::new() }
    }

    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Ordered sheet names.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}
