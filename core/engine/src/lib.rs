//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the shared data model.
//! CONTEXT: Re-exports the cell/grid/workbook types for use by other crates.

pub mod cell;
pub mod grid;
pub mod workbook;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use grid::Grid;
pub use workbook::{Sheet, Workbook};
