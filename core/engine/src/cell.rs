//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the fundamental value type for a single grid cell.
//! CONTEXT: Cells arrive from the workbook reader as one of a closed set of
//! scalar variants. The engine never coerces between variants; conversion
//! from the underlying file format happens once, at the persistence boundary.

use serde::{Deserialize, Serialize};

/// The scalar content of a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// An error marker carried over from the source file (e.g. "#DIV/0!").
    /// Passed through opaquely; the engine never interprets it.
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the numeric content if this cell holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the display value of the cell as a String.
    /// Block labels and entity names are compared through this rendering,
    /// so a numeric header cell stringifies the same way pandas would.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
            CellValue::Error(e) => e.clone(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}
